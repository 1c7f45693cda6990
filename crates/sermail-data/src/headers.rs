//! Display headers that differ from the envelope sender.

use crate::mail_user::MailUser;
use serde::Serialize;
use std::fmt;

/// Header overrides shown to the recipient.
///
/// `header_from` is the "From" a mail client displays, which may differ
/// from the authenticated sender of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageHeaders {
    #[serde(rename = "from")]
    header_from: MailUser,
}

impl MessageHeaders {
    /// Creates headers with a display "From".
    #[must_use]
    pub const fn new(header_from: MailUser) -> Self {
        Self { header_from }
    }

    /// Returns the display "From".
    #[must_use]
    pub const fn header_from(&self) -> &MailUser {
        &self.header_from
    }
}

impl From<MailUser> for MessageHeaders {
    fn from(header_from: MailUser) -> Self {
        Self::new(header_from)
    }
}

impl fmt::Display for MessageHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serialize::write_pretty(self, f)
    }
}
