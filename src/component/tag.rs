//! Component tag names

use std::fmt;

use super::ComponentError;

/// Names reserved by SVG and MathML that look like custom element tags
const RESERVED: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// A validated component tag
///
/// Tags start with a lowercase ASCII letter, contain at least one `-`, and
/// otherwise use only lowercase letters, digits, `-`, `.` and `_`. The hyphen
/// keeps them apart from built-in element names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(tag: &str) -> Result<Self, ComponentError> {
        let mut chars = tag.chars();
        match chars.next() {
            None => return Err(ComponentError::invalid_tag(tag, "tag is empty")),
            Some(c) if !c.is_ascii_lowercase() => {
                return Err(ComponentError::invalid_tag(
                    tag,
                    "tag must start with a lowercase ASCII letter",
                ))
            }
            Some(_) => {}
        }
        if let Some(c) = chars.find(|c| {
            !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
        }) {
            return Err(ComponentError::invalid_tag(
                tag,
                format!("character '{}' is not allowed", c),
            ));
        }
        if !tag.contains('-') {
            return Err(ComponentError::invalid_tag(tag, "tag must contain a hyphen"));
        }
        if RESERVED.contains(&tag) {
            return Err(ComponentError::invalid_tag(tag, "tag is reserved"));
        }
        Ok(Self(tag.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Tag {
    type Error = ComponentError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        Tag::parse(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        for tag in ["show-home", "x-a", "my-el.v2", "a_b-c", "sapl-pdp-config1"] {
            assert!(Tag::parse(tag).is_ok(), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_empty_tag() {
        assert!(matches!(
            Tag::parse(""),
            Err(ComponentError::InvalidTag { .. })
        ));
    }

    #[test]
    fn test_tag_without_hyphen() {
        let err = Tag::parse("home").unwrap_err();
        assert_eq!(
            err,
            ComponentError::invalid_tag("home", "tag must contain a hyphen")
        );
    }

    #[test]
    fn test_tag_with_uppercase_or_space() {
        assert!(Tag::parse("Show-home").is_err());
        assert!(Tag::parse("show-Home").is_err());
        assert!(Tag::parse("show home").is_err());
        assert!(Tag::parse("-show").is_err());
    }

    #[test]
    fn test_reserved_tag() {
        assert!(Tag::parse("font-face").is_err());
    }
}
