//! # sermail-data
//!
//! Validated message model for the Secure Email Relay mail API.
//!
//! ## Features
//!
//! - **Self-validating value types**: [`MailUser`], [`ContentBlock`],
//!   [`Attachment`], [`MessageHeaders`]
//! - **Staged attachment builder**: Base64 text, file path or byte buffer in,
//!   validated [`Attachment`] out
//! - **Message builder**: order-preserving recipient and content lists,
//!   required-part checks, snapshot `build()`
//! - **Canonical payload**: deterministic JSON via [`serialize`]
//!
//! ## Quick Start
//!
//! ```
//! use sermail_data::{Attachment, ContentType, Message};
//!
//! # fn main() -> sermail_data::Result<()> {
//! let logo = Attachment::builder()
//!     .from_bytes(b"\x89PNG", "logo.png")
//!     .disposition_inline(None)
//!     .build()?;
//! let cid = logo.content_id().unwrap_or_default().to_string();
//!
//! let message = Message::builder()
//!     .subject("This is a test email")
//!     .sender("sender@example.com", Some("Joe Sender"))?
//!     .add_content("This is a test message", ContentType::Text)
//!     .add_content(format!("<img src=\"cid:{cid}\">"), ContentType::Html)
//!     .add_to("recipient1@example.com", Some("Recipient 1"))?
//!     .add_attachment(logo)
//!     .build()?;
//!
//! let payload = message.to_value().expect("message serializes");
//! assert_eq!(payload["tos"][0]["email"], "recipient1@example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Values are checked when they enter the model: constructors and setters
//! reject malformed addresses, non-canonical Base64, blank filenames and
//! unresolvable MIME types immediately. Only the cross-field requirements
//! of a message (sender, `to` recipient, subject, content) wait for
//! [`MessageBuilder::build`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod content;
mod content_type;
mod error;
mod headers;
mod mail_user;
mod message;

pub mod encoding;
pub mod mime_types;
pub mod serialize;

pub use attachment::{
    Attachment, AttachmentBuilder, AttachmentOptions, Disposition, MAX_FILENAME_LENGTH,
};
pub use content::ContentBlock;
pub use content_type::ContentType;
pub use error::{Error, Result, ValidationError};
pub use headers::MessageHeaders;
pub use mail_user::MailUser;
pub use message::{Message, MessageBuilder};
