//! Message content bodies.

use crate::content_type::ContentType;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// One rendition of the message body.
///
/// The body may be empty. Blocks are kept in insertion order on a
/// [`Message`](crate::Message); the first block is the primary rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    body: String,
    #[serde(rename = "type")]
    content_type: ContentType,
}

impl ContentBlock {
    /// Creates a content block.
    #[must_use]
    pub fn new(body: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    /// Creates a `text/plain` block.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(body, ContentType::Text)
    }

    /// Creates a `text/html` block.
    #[must_use]
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(body, ContentType::Html)
    }

    /// Creates a block from a wire type token such as `text/html`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`](crate::Error::TypeMismatch) if the
    /// token is not a known content type.
    pub fn from_token(body: impl Into<String>, token: &str) -> Result<Self> {
        Ok(Self::new(body, ContentType::parse(token)?))
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the content type.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }
}

impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serialize::write_pretty(self, f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_serialize() {
        let block = ContentBlock::new("Hello", ContentType::Text);
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"body": "Hello", "type": "text/plain"})
        );
    }

    #[test]
    fn test_empty_body_allowed() {
        let block = ContentBlock::html("");
        assert_eq!(block.body(), "");
        assert_eq!(block.content_type(), ContentType::Html);
    }

    #[test]
    fn test_from_token() {
        let block = ContentBlock::from_token("<b>hi</b>", "text/html").unwrap();
        assert_eq!(block, ContentBlock::html("<b>hi</b>"));
        assert!(ContentBlock::from_token("x", "application/json").is_err());
    }

    #[test]
    fn test_display_is_json() {
        let block = ContentBlock::text("Hi");
        let rendered = block.to_string();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["body"], "Hi");
        assert_eq!(parsed["type"], "text/plain");
    }
}
