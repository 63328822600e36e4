//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::markup::ast::*;
use crate::markup::lexer::Token;

/// Parse markup source into a syntax tree
pub fn parse(input: &str) -> Result<Markup, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::markup::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    markup_parser()
        .parse(token_stream)
        .into_result()
        .map(|nodes| Markup {
            nodes: normalize(nodes),
        })
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn markup_parser<'a, I>() -> impl Parser<'a, I, Vec<MarkupNode>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Optional whitespace inside tags and bindings
    let ws = select! {
        Token::Space(_) => (),
    }
    .repeated();

    let name = select! {
        Token::Word(w) => w,
    };

    let quoted = select! {
        Token::Quoted(raw) => raw,
    };

    let attribute = name
        .clone()
        .then(
            just(Token::Equals)
                .padded_by(ws.clone())
                .ignore_then(quoted)
                .or_not(),
        )
        .map(|(name, raw)| MarkupAttribute {
            name,
            value: match raw {
                Some(raw) => attribute_value(&raw),
                None => MarkupAttrValue::Flag,
            },
        });

    let attributes = ws
        .clone()
        .ignore_then(attribute)
        .repeated()
        .collect::<Vec<_>>();

    let node = recursive(|node| {
        let open_tag = just(Token::Lt)
            .ignore_then(name.clone())
            .then(attributes.clone())
            .then_ignore(ws.clone());

        // <name attr/>
        let self_closing = open_tag
            .clone()
            .then_ignore(just(Token::SelfClose))
            .map(|(name, attributes)| {
                MarkupNode::Element(MarkupElement {
                    name,
                    attributes,
                    children: Vec::new(),
                })
            });

        // <name attr>children</name>
        let with_children = open_tag
            .then_ignore(just(Token::Gt))
            .then(node.repeated().collect::<Vec<_>>())
            .then_ignore(just(Token::CloseOpen))
            .then(name.clone())
            .then_ignore(ws.clone())
            .then_ignore(just(Token::Gt))
            .try_map(|(((name, attributes), children), closing), span| {
                if name == closing {
                    Ok(MarkupNode::Element(MarkupElement {
                        name,
                        attributes,
                        children,
                    }))
                } else {
                    Err(Rich::custom(
                        span,
                        format!("closing tag '</{}>' does not match '<{}>'", closing, name),
                    ))
                }
            });

        // {{ name }}
        let binding = just(Token::BindOpen)
            .ignore_then(ws.clone())
            .ignore_then(name.clone())
            .then_ignore(ws.clone())
            .then_ignore(just(Token::BindClose))
            .map(MarkupNode::Binding);

        // Everything that cannot start a tag or binding is text
        let text = select! {
            Token::Word(s) => s,
            Token::Space(s) => s,
            Token::Brace(s) => s,
            Token::Quoted(s) => s,
            Token::Gt => ">".to_string(),
            Token::Slash => "/".to_string(),
            Token::SelfClose => "/>".to_string(),
            Token::Equals => "=".to_string(),
            Token::Quote => "\"".to_string(),
            Token::BindClose => "}}".to_string(),
        }
        .repeated()
        .at_least(1)
        .collect::<Vec<String>>()
        .map(|parts| MarkupNode::Text(parts.concat()));

        // Note: self_closing before with_children, both start with an open tag
        choice((self_closing, with_children, binding, text)).boxed()
    });

    node.repeated().collect::<Vec<_>>().then_ignore(end())
}

/// Interpret a raw quoted attribute value, detecting whole-value bindings
fn attribute_value(raw: &str) -> MarkupAttrValue {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    let trimmed = inner.trim();
    if let Some(binding) = trimmed
        .strip_prefix("{{")
        .and_then(|s| s.strip_suffix("}}"))
        .map(str::trim)
    {
        if !binding.is_empty() && !binding.contains(char::is_whitespace) {
            return MarkupAttrValue::Binding(binding.to_string());
        }
    }
    MarkupAttrValue::Literal(decode_entities(inner))
}

/// Collapse whitespace in text, drop blank text, decode entities
///
/// Text is trimmed at the start and end of its parent. Next to a sibling
/// element or binding one space is kept, so `Click <a>here</a> now` keeps
/// its word breaks. Whitespace-only text is dropped unless it separates two
/// bindings.
fn normalize(nodes: Vec<MarkupNode>) -> Vec<MarkupNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        match node {
            MarkupNode::Text(text) => {
                let prev = i.checked_sub(1).and_then(|p| nodes.get(p));
                let next = nodes.get(i + 1);
                let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if collapsed.is_empty() {
                    if matches!(prev, Some(MarkupNode::Binding(_)))
                        && matches!(next, Some(MarkupNode::Binding(_)))
                    {
                        out.push(MarkupNode::Text(" ".to_string()));
                    }
                    continue;
                }
                let lead = if prev.is_some() && text.starts_with(char::is_whitespace) {
                    " "
                } else {
                    ""
                };
                let trail = if next.is_some() && text.ends_with(char::is_whitespace) {
                    " "
                } else {
                    ""
                };
                out.push(MarkupNode::Text(format!(
                    "{}{}{}",
                    lead,
                    decode_entities(&collapsed),
                    trail
                )));
            }
            MarkupNode::Element(element) => {
                let mut element = element.clone();
                element.children = normalize(element.children);
                out.push(MarkupNode::Element(element));
            }
            binding => out.push(binding.clone()),
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
