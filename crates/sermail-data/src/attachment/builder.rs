//! Two-stage attachment builder.
//!
//! ```text
//! AttachmentBuilder ── from_base64() / from_file() / from_bytes() ──→ AttachmentOptions ── build() ──→ Attachment
//! ```
//!
//! The first stage only offers content sources, so an attachment without
//! content cannot be expressed. The second stage takes optional overrides.

use super::{Attachment, Disposition, read_file};
use crate::encoding::{encode_base64, ensure_canonical_base64};
use crate::error::Result;
use std::path::Path;

/// Content-source stage of attachment construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachmentBuilder;

// Each source method consumes the first stage and yields the second.
#[allow(clippy::wrong_self_convention)]
impl AttachmentBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Uses Base64-encoded content.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `content` is not canonical Base64.
    pub fn from_base64(
        self,
        content: impl Into<String>,
        filename: impl Into<String>,
    ) -> Result<AttachmentOptions> {
        let content = content.into();
        ensure_canonical_base64(&content)?;
        Ok(AttachmentOptions::new(content, filename.into()))
    }

    /// Reads and encodes a file. The filename defaults to the file's base
    /// name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank path,
    /// [`Error::ResourceNotFound`](crate::Error::ResourceNotFound) if the
    /// path is not a regular file, or an I/O error if reading fails.
    pub fn from_file(self, path: impl AsRef<Path>) -> Result<AttachmentOptions> {
        let (content, filename) = read_file(path.as_ref())?;
        Ok(AttachmentOptions::new(content, filename))
    }

    /// Encodes a byte buffer.
    #[must_use]
    pub fn from_bytes(self, data: &[u8], filename: impl Into<String>) -> AttachmentOptions {
        AttachmentOptions::new(encode_base64(data), filename.into())
    }
}

/// Optional-configuration stage of attachment construction.
#[derive(Debug, Clone)]
#[must_use = "call build() to produce the attachment"]
pub struct AttachmentOptions {
    content: String,
    filename: String,
    mime_type: Option<String>,
    disposition: Disposition,
    content_id: Option<String>,
}

impl AttachmentOptions {
    fn new(content: String, filename: String) -> Self {
        Self {
            content,
            filename,
            mime_type: None,
            disposition: Disposition::Attachment,
            content_id: None,
        }
    }

    /// Sets the disposition. The content id is only kept for
    /// [`Disposition::Inline`]; a missing or blank id is generated at
    /// [`build`](Self::build).
    pub fn disposition(mut self, disposition: Disposition, content_id: Option<&str>) -> Self {
        self.disposition = disposition;
        self.content_id = match disposition {
            Disposition::Inline => content_id.map(str::to_string),
            Disposition::Attachment => None,
        };
        self
    }

    /// Marks the attachment inline, optionally with a fixed content id.
    pub fn disposition_inline(self, content_id: Option<&str>) -> Self {
        self.disposition(Disposition::Inline, content_id)
    }

    /// Marks the attachment as a separate file and clears any content id.
    pub fn disposition_attached(self) -> Self {
        self.disposition(Disposition::Attachment, None)
    }

    /// Overrides the filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Overrides the MIME type instead of deducing it from the filename.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Validates and produces the attachment.
    ///
    /// # Errors
    ///
    /// See [`Attachment::new`].
    pub fn build(self) -> Result<Attachment> {
        Attachment::new(
            self.content,
            self.filename,
            self.mime_type.as_deref(),
            self.disposition,
            self.content_id.as_deref(),
        )
    }
}
