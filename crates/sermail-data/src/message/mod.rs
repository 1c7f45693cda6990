//! Finalized email messages.

mod builder;

pub use builder::MessageBuilder;

use crate::attachment::Attachment;
use crate::content::ContentBlock;
use crate::headers::MessageHeaders;
use crate::mail_user::MailUser;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// An immutable, validated message ready for sending.
///
/// Produced only by [`MessageBuilder::build`]. Every list keeps insertion
/// order; for `content` the first block is the primary rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(rename = "from")]
    sender: MailUser,
    subject: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<MessageHeaders>,
    #[serde(rename = "tos", skip_serializing_if = "Vec::is_empty")]
    to: Vec<MailUser>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<MailUser>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bcc: Vec<MailUser>,
    #[serde(rename = "replyTos", skip_serializing_if = "Vec::is_empty")]
    reply_to: Vec<MailUser>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
}

impl Message {
    /// Starts a [`MessageBuilder`].
    #[must_use]
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Returns the authenticated sender.
    #[must_use]
    pub const fn sender(&self) -> &MailUser {
        &self.sender
    }

    /// Returns the display "From", if one was set.
    #[must_use]
    pub fn header_from(&self) -> Option<&MailUser> {
        self.headers.as_ref().map(MessageHeaders::header_from)
    }

    /// Returns the header overrides, if any.
    #[must_use]
    pub const fn headers(&self) -> Option<&MessageHeaders> {
        self.headers.as_ref()
    }

    /// Returns the subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the content blocks in insertion order.
    #[must_use]
    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    /// Returns the primary recipients.
    #[must_use]
    pub fn to(&self) -> &[MailUser] {
        &self.to
    }

    /// Returns the carbon-copy recipients.
    #[must_use]
    pub fn cc(&self) -> &[MailUser] {
        &self.cc
    }

    /// Returns the blind carbon-copy recipients.
    #[must_use]
    pub fn bcc(&self) -> &[MailUser] {
        &self.bcc
    }

    /// Returns the reply-to addresses.
    #[must_use]
    pub fn reply_to(&self) -> &[MailUser] {
        &self.reply_to
    }

    /// Returns the attachments.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the canonical wire payload.
    ///
    /// # Errors
    ///
    /// See [`serialize::to_value`](crate::serialize::to_value).
    pub fn to_value(&self) -> serde_json::Result<Value> {
        crate::serialize::to_value(self)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serialize::write_pretty(self, f)
    }
}
