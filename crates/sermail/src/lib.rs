//! # sermail
//!
//! Client facade for the Secure Email Relay mail API.
//!
//! ## Features
//!
//! - **Message model**: re-exports the validated builders of
//!   [`sermail_data`]
//! - **Configuration**: endpoint and credential loading from JSON files
//! - **Transport seam**: plug in any HTTP stack through [`Transport`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use sermail::{Client, ContentType, Message};
//!
//! let message = Message::builder()
//!     .subject("This is a test email")
//!     .sender("sender@example.com", Some("Joe Sender"))?
//!     .add_content("This is a test message", ContentType::Text)
//!     .add_to("recipient1@example.com", Some("Recipient 1"))?
//!     .build()?;
//!
//! let client = Client::new(my_transport);
//! let result = client.send(&message).await?;
//! println!("HTTP Response: {}/{}", result.status, result.reason);
//! println!("Message ID: {:?}", result.message_id);
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Endpoint configuration and credentials
//! - [`transport`]: The [`Transport`] trait and send results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
pub mod config;
mod error;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use transport::{SendRequest, SendResult, Transport};

pub use sermail_data::{
    Attachment, AttachmentBuilder, AttachmentOptions, ContentBlock, ContentType, Disposition,
    MailUser, Message, MessageBuilder, MessageHeaders, ValidationError, serialize,
};
