//! Transport seam between the client and the HTTP endpoint.
//!
//! The client never talks to the network itself. It serializes a
//! [`Message`](sermail_data::Message) into the canonical payload and hands a
//! [`SendRequest`] to a [`Transport`], which owns authentication, retries and
//! timeouts, and reports a [`SendResult`].

use crate::config::Credentials;
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// A single send request.
#[derive(Debug, Clone, Copy)]
pub struct SendRequest<'a> {
    /// Endpoint URL.
    pub url: &'a str,
    /// Canonical message payload.
    pub payload: &'a Value,
    /// Credentials for the authenticated session, if configured.
    pub credentials: Option<&'a Credentials>,
    /// Request timeout; `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

/// Outcome of a send reported by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase.
    pub reason: String,
    /// Identifier the relay assigned to the accepted message.
    pub message_id: Option<String>,
    /// Identifier of the API request, for support tickets.
    pub request_id: Option<String>,
    /// Explanation from the response body, usually set on failure.
    pub detail: Option<String>,
}

/// JSON body returned by the send endpoint.
#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    message_id: Option<String>,
    request_id: Option<String>,
    reason: Option<String>,
}

impl SendResult {
    /// Creates a result without body fields.
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            message_id: None,
            request_id: None,
            detail: None,
        }
    }

    /// Builds a result from an HTTP status line and JSON response body.
    ///
    /// An empty body is accepted and leaves the body fields unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty body is not valid JSON.
    pub fn from_response(status: u16, reason: impl Into<String>, body: &str) -> Result<Self> {
        let parsed = if body.trim().is_empty() {
            ResponseBody::default()
        } else {
            serde_json::from_str(body)?
        };

        Ok(Self {
            status,
            reason: reason.into(),
            message_id: parsed.message_id,
            request_id: parsed.request_id,
            detail: parsed.reason,
        })
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Delivers canonical payloads to the mail endpoint.
///
/// Implementations must be shareable across tasks; the returned future must
/// be `Send` so sends can run on a multi-threaded runtime.
pub trait Transport: Send + Sync {
    /// Sends one request and reports the endpoint's answer.
    ///
    /// A non-2xx answer is still `Ok`; `Err` is reserved for failures to
    /// obtain an answer at all.
    fn send(&self, request: SendRequest<'_>) -> impl Future<Output = Result<SendResult>> + Send;
}
