//! Canonical wire payload.
//!
//! A [`Message`](crate::Message) maps to the JSON object the send endpoint
//! consumes:
//!
//! | key           | present when                    |
//! |---------------|---------------------------------|
//! | `from`        | always                          |
//! | `subject`     | always                          |
//! | `content`     | at least one content block      |
//! | `headers`     | a header "From" was set         |
//! | `tos`         | at least one `to` recipient     |
//! | `cc`, `bcc`   | the list is non-empty           |
//! | `replyTos`    | the list is non-empty           |
//! | `attachments` | the list is non-empty           |
//!
//! Absent fields are omitted, never `null`. Lists keep insertion order.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Serializes a message or value type to its canonical JSON value.
///
/// # Errors
///
/// Propagates [`serde_json::Error`]; the types of this crate always
/// serialize successfully.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Value> {
    serde_json::to_value(value)
}

/// Serializes a message or value type to a compact JSON string.
///
/// # Errors
///
/// See [`to_value`].
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Serializes to indented JSON with keys in sorted order.
///
/// # Errors
///
/// See [`to_value`].
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    // Going through `Value` sorts object keys.
    serde_json::to_string_pretty(&to_value(value)?)
}

pub(crate) fn write_pretty<T: Serialize + ?Sized>(
    value: &T,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let rendered = to_json_pretty(value).map_err(|_| fmt::Error)?;
    f.write_str(&rendered)
}
