//! Error types for message construction.

use std::path::PathBuf;

/// Result type alias for message construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Message construction error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token did not name a member of the expected enumeration.
    #[error("Type mismatch: expected {expected}, got {found:?}")]
    TypeMismatch {
        /// Name of the expected type.
        expected: &'static str,
        /// The offending input.
        found: String,
    },

    /// A well-typed value failed a semantic check.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced path is not an existing regular file.
    #[error("File not found: '{}'", .0.display())]
    ResourceNotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    /// Returns the validation failure, if this is one.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Semantic validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Email address is empty.
    #[error("email address must not be empty")]
    EmptyEmail,
    /// Email address does not match the address grammar.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    /// Attachment content is not canonical base64.
    #[error("invalid base64 content")]
    InvalidBase64,
    /// Filename is empty or whitespace.
    #[error("filename must be a non-empty string")]
    EmptyFilename,
    /// Filename exceeds the length limit.
    #[error("filename must be at most {max} characters long, got {len}")]
    FilenameTooLong {
        /// Actual length in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// Explicit MIME type is empty or whitespace.
    #[error("mime type must be a non-empty string")]
    EmptyMimeType,
    /// No MIME type is known for the filename.
    #[error("unable to deduce mime type for file: {0}")]
    UnknownMimeType(String),
    /// File path is empty or whitespace.
    #[error("file path cannot be empty or contain only whitespace")]
    EmptyPath,
    /// Message has no sender.
    #[error("sender required")]
    MissingSender,
    /// Message has no primary recipient.
    #[error("at least one recipient required")]
    MissingRecipient,
    /// Message has no subject.
    #[error("subject required")]
    MissingSubject,
    /// Message has no content block.
    #[error("at least one content item required")]
    MissingContent,
}

impl ValidationError {
    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail | Self::InvalidEmail(_) => "email",
            Self::InvalidBase64 => "content",
            Self::EmptyFilename | Self::FilenameTooLong { .. } => "filename",
            Self::EmptyMimeType | Self::UnknownMimeType(_) => "mime_type",
            Self::EmptyPath => "path",
            Self::MissingSender => "from",
            Self::MissingRecipient => "tos",
            Self::MissingSubject => "subject",
            Self::MissingContent => "content",
        }
    }
}
