//! Filename extension to MIME type resolution.

use crate::error::{Result, ValidationError};
use std::path::Path;

/// Known extensions, lowercase, sorted for binary search.
static EXTENSIONS: &[(&str, &str)] = &[
    ("7z", "application/x-7z-compressed"),
    ("aac", "audio/aac"),
    ("avi", "video/x-msvideo"),
    ("avif", "image/avif"),
    ("bin", "application/octet-stream"),
    ("bmp", "image/bmp"),
    ("bz2", "application/x-bzip2"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("eml", "message/rfc822"),
    ("eot", "application/vnd.ms-fontobject"),
    ("epub", "application/epub+zip"),
    ("flac", "audio/flac"),
    ("gif", "image/gif"),
    ("gz", "application/gzip"),
    ("heic", "image/heic"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("ico", "image/vnd.microsoft.icon"),
    ("ics", "text/calendar"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("log", "text/plain"),
    ("m4a", "audio/mp4"),
    ("md", "text/markdown"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    ("mov", "video/quicktime"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("ogv", "video/ogg"),
    ("otf", "font/otf"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("rar", "application/vnd.rar"),
    ("rtf", "application/rtf"),
    ("sh", "application/x-sh"),
    ("svg", "image/svg+xml"),
    ("tar", "application/x-tar"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("tsv", "text/tab-separated-values"),
    ("ttf", "font/ttf"),
    ("txt", "text/plain"),
    ("vcf", "text/vcard"),
    ("wav", "audio/wav"),
    ("weba", "audio/webm"),
    ("webm", "video/webm"),
    ("webp", "image/webp"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("xhtml", "application/xhtml+xml"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("xml", "application/xml"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("zip", "application/zip"),
];

/// Looks up the MIME type for a filename by its extension.
///
/// Matching is case-insensitive. Returns `None` for names without an
/// extension or with an extension missing from the table.
#[must_use]
pub fn from_filename(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename).extension()?.to_str()?;
    let ext = ext.to_ascii_lowercase();

    EXTENSIONS
        .binary_search_by(|(key, _)| (*key).cmp(ext.as_str()))
        .ok()
        .map(|idx| EXTENSIONS[idx].1)
}

/// Resolves the MIME type of an attachment.
///
/// An explicit type wins and must not be blank; otherwise the type is
/// deduced from `filename`.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyMimeType`] for a blank explicit type and
/// [`ValidationError::UnknownMimeType`] when deduction fails.
pub fn resolve(explicit: Option<&str>, filename: &str) -> Result<String> {
    match explicit {
        Some(mime_type) if mime_type.trim().is_empty() => {
            Err(ValidationError::EmptyMimeType.into())
        }
        Some(mime_type) => Ok(mime_type.to_string()),
        None => from_filename(filename)
            .map(str::to_string)
            .ok_or_else(|| ValidationError::UnknownMimeType(filename.to_string()).into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(EXTENSIONS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_from_filename() {
        assert_eq!(from_filename("logo.png"), Some("image/png"));
        assert_eq!(from_filename("REPORT.PDF"), Some("application/pdf"));
        assert_eq!(from_filename("dir/file.csv"), Some("text/csv"));
        assert_eq!(from_filename("archive.tar.gz"), Some("application/gzip"));
        assert_eq!(from_filename("README"), None);
        assert_eq!(from_filename("data.unknownext"), None);
        assert_eq!(from_filename(".bashrc"), None);
    }

    #[test]
    fn test_resolve_explicit_wins() {
        assert_eq!(
            resolve(Some("application/x-custom"), "file.png").unwrap(),
            "application/x-custom"
        );
    }

    #[test]
    fn test_resolve_blank_explicit() {
        let err = resolve(Some("  "), "file.png").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::EmptyMimeType));
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve(None, "file.qqq").unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::UnknownMimeType("file.qqq".to_string()))
        );
    }
}
