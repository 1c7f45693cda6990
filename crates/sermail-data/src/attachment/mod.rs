//! File and inline attachments.
//!
//! Every attachment carries canonical Base64 content, a filename, a resolved
//! MIME type and a disposition. Inline attachments always carry a content
//! id so HTML bodies can reference them as `cid:<id>`; regular attachments
//! never do.

mod builder;

pub use builder::{AttachmentBuilder, AttachmentOptions};

use crate::encoding::{encode_base64, ensure_canonical_base64};
use crate::error::{Error, Result, ValidationError};
use crate::mime_types;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Maximum filename length in characters.
pub const MAX_FILENAME_LENGTH: usize = 1000;

/// How the recipient's client should present an attachment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Rendered in the body, referenced by content id.
    Inline,
    /// Delivered as a separate file.
    #[default]
    Attachment,
}

impl Disposition {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
        }
    }
}

impl FromStr for Disposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "attachment" => Ok(Self::Attachment),
            _ => Err(Error::type_mismatch("Disposition", s)),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    content: String,
    disposition: Disposition,
    filename: String,
    #[serde(rename = "type")]
    mime_type: String,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    content_id: Option<String>,
}

impl Attachment {
    /// Creates an attachment from already encoded content.
    ///
    /// When `mime_type` is `None` it is deduced from the filename extension.
    /// For [`Disposition::Inline`] a blank or missing `content_id` is
    /// replaced by a freshly generated UUID; for
    /// [`Disposition::Attachment`] any supplied id is dropped.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the content is not canonical Base64,
    /// the filename is blank or longer than [`MAX_FILENAME_LENGTH`]
    /// characters, or the MIME type is blank or cannot be deduced.
    pub fn new(
        content: impl Into<String>,
        filename: impl Into<String>,
        mime_type: Option<&str>,
        disposition: Disposition,
        content_id: Option<&str>,
    ) -> Result<Self> {
        let content = content.into();
        let filename = filename.into();

        ensure_canonical_base64(&content)?;

        if filename.trim().is_empty() {
            return Err(ValidationError::EmptyFilename.into());
        }
        let len = filename.chars().count();
        if len > MAX_FILENAME_LENGTH {
            return Err(ValidationError::FilenameTooLong {
                len,
                max: MAX_FILENAME_LENGTH,
            }
            .into());
        }

        let mime_type = mime_types::resolve(mime_type, &filename)?;

        let (content_id, generated) = resolve_content_id(disposition, content_id);

        tracing::debug!(
            filename = %filename,
            mime_type = %mime_type,
            %disposition,
            content_id = content_id.as_deref(),
            generated,
            "attachment created"
        );

        Ok(Self {
            content,
            disposition,
            filename,
            mime_type,
            content_id,
        })
    }

    /// Creates an attachment from Base64 content.
    ///
    /// # Errors
    ///
    /// See [`Attachment::new`].
    pub fn from_base64(content: impl Into<String>, filename: impl Into<String>) -> Result<Self> {
        Self::new(content, filename, None, Disposition::default(), None)
    }

    /// Creates an attachment from raw bytes.
    ///
    /// # Errors
    ///
    /// See [`Attachment::new`].
    pub fn from_bytes(data: &[u8], filename: impl Into<String>) -> Result<Self> {
        Self::new(
            encode_base64(data),
            filename,
            None,
            Disposition::default(),
            None,
        )
    }

    /// Creates an attachment from a file, named after the file's base name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if `path` is not an existing
    /// regular file, plus the errors of [`Attachment::new`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let (content, filename) = read_file(path.as_ref())?;
        Self::new(content, filename, None, Disposition::default(), None)
    }

    /// Starts a staged [`AttachmentBuilder`].
    #[must_use]
    pub const fn builder() -> AttachmentBuilder {
        AttachmentBuilder
    }

    /// Returns the Base64 content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the disposition.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Returns the content id; always `Some` for inline attachments.
    #[must_use]
    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serialize::write_pretty(self, f)
    }
}

/// Picks the content id for a disposition; the flag is set when the id
/// was generated rather than supplied.
fn resolve_content_id(
    disposition: Disposition,
    supplied: Option<&str>,
) -> (Option<String>, bool) {
    match (disposition, supplied.filter(|id| !id.trim().is_empty())) {
        (Disposition::Attachment, _) => (None, false),
        (Disposition::Inline, Some(id)) => (Some(id.to_string()), false),
        (Disposition::Inline, None) => (Some(uuid::Uuid::new_v4().to_string()), true),
    }
}

/// Reads a file and returns its Base64 content and base name.
fn read_file(path: &Path) -> Result<(String, String)> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ValidationError::EmptyPath.into());
    }
    if !path.is_file() {
        return Err(Error::ResourceNotFound(path.to_path_buf()));
    }

    let data = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok((encode_base64(&data), filename))
}
