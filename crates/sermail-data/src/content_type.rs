//! Content body types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendition of a content body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// Plain text (`text/plain`).
    #[serde(rename = "text/plain")]
    Text,
    /// HTML (`text/html`).
    #[serde(rename = "text/html")]
    Html,
}

impl ContentType {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Html => "text/html",
        }
    }

    /// Parses a wire token.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace and
    /// any `; charset=...` style parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the token names neither type.
    pub fn parse(s: &str) -> Result<Self> {
        let essence = s.split(';').next().unwrap_or_default().trim();

        if essence.eq_ignore_ascii_case("text/plain") {
            Ok(Self::Text)
        } else if essence.eq_ignore_ascii_case("text/html") {
            Ok(Self::Html)
        } else {
            Err(Error::type_mismatch("ContentType", s))
        }
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_tokens() {
        assert_eq!(ContentType::Text.as_str(), "text/plain");
        assert_eq!(ContentType::Html.to_string(), "text/html");
    }

    #[test]
    fn test_content_type_parse() {
        assert_eq!(ContentType::parse("text/plain").unwrap(), ContentType::Text);
        assert_eq!(ContentType::parse(" TEXT/HTML ").unwrap(), ContentType::Html);
        assert_eq!(
            "text/html; charset=utf-8".parse::<ContentType>().unwrap(),
            ContentType::Html
        );
    }

    #[test]
    fn test_content_type_parse_unknown() {
        let err = ContentType::parse("text/markdown").unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "ContentType",
                ..
            }
        ));
    }

    #[test]
    fn test_content_type_serde() {
        let json = serde_json::to_string(&ContentType::Html).unwrap();
        assert_eq!(json, "\"text/html\"");
        let parsed: ContentType = serde_json::from_str("\"text/plain\"").unwrap();
        assert_eq!(parsed, ContentType::Text);
    }
}
