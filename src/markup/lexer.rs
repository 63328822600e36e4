//! Lexer for inline template markup using logos

use std::fmt;

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Comments (skip)
    #[regex(r"<!--([^-]|-[^-])*-->", logos::skip)]
    Comment,

    // Tag delimiters (longer patterns first)
    #[token("</")]
    CloseOpen,
    #[token("<")]
    Lt,
    #[token("/>")]
    SelfClose,
    #[token(">")]
    Gt,
    #[token("/")]
    Slash,
    #[token("=")]
    Equals,

    // Interpolation delimiters
    #[token("{{")]
    BindOpen,
    #[token("}}")]
    BindClose,

    // Single braces only appear in text (CSS blocks)
    #[regex(r"[{}]", |lex| lex.slice().to_string())]
    Brace(String),

    /// Quoted string, raw slice including the quotes
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_string())]
    Quoted(String),

    /// Unbalanced quote in text
    #[token("\"")]
    Quote,

    #[regex(r"[ \t\r\n]+", |lex| lex.slice().to_string())]
    Space(String),

    #[regex(r#"[^<>/="{} \t\r\n]+"#, |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// Source text this token stands for when it appears inside text content
    pub fn as_text(&self) -> &str {
        match self {
            Token::Comment => "",
            Token::CloseOpen => "</",
            Token::Lt => "<",
            Token::SelfClose => "/>",
            Token::Gt => ">",
            Token::Slash => "/",
            Token::Equals => "=",
            Token::BindOpen => "{{",
            Token::BindClose => "}}",
            Token::Quote => "\"",
            Token::Brace(s) | Token::Quoted(s) | Token::Space(s) | Token::Word(s) => s,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(s) => write!(f, "name '{}'", s),
            Token::Quoted(s) => write!(f, "string {}", s),
            Token::Space(_) => f.write_str("whitespace"),
            Token::Brace(s) => write!(f, "'{}'", s),
            other => write!(f, "'{}'", other.as_text()),
        }
    }
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
