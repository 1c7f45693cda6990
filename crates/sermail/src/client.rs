//! Mail API client.

use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::transport::{SendRequest, SendResult, Transport};
use sermail_data::Message;
use tracing::{info, warn};

/// Sends finalized messages through a [`Transport`].
#[derive(Debug)]
pub struct Client<T> {
    config: ClientConfig,
    credentials: Option<Credentials>,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a client with the default configuration.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            transport,
        }
    }

    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn with_config(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            credentials: None,
            transport,
        })
    }

    /// Attaches credentials passed to the transport on every request.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a message.
    ///
    /// The endpoint's answer is returned as-is, including non-2xx statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be serialized or the
    /// transport fails to obtain an answer.
    pub async fn send(&self, message: &Message) -> Result<SendResult> {
        let payload = message.to_value()?;
        let url = self.config.send_url();

        info!(
            url = %url,
            recipients = message.to().len() + message.cc().len() + message.bcc().len(),
            attachments = message.attachments().len(),
            "sending message"
        );

        let request = SendRequest {
            url: &url,
            payload: &payload,
            credentials: self.credentials.as_ref(),
            timeout: self.config.timeout(),
        };
        let result = self.transport.send(request).await?;

        if result.is_success() {
            info!(
                status = result.status,
                message_id = result.message_id.as_deref(),
                "message accepted"
            );
        } else {
            warn!(
                status = result.status,
                reason = %result.reason,
                request_id = result.request_id.as_deref(),
                "message rejected"
            );
        }

        Ok(result)
    }

    /// Sends a message and turns non-2xx answers into [`Error::Rejected`].
    ///
    /// # Errors
    ///
    /// See [`Client::send`]; additionally fails on a non-success status.
    pub async fn send_checked(&self, message: &Message) -> Result<SendResult> {
        let result = self.send(message).await?;
        if result.is_success() {
            Ok(result)
        } else {
            let reason = result.detail.unwrap_or(result.reason);
            Err(Error::rejected(result.status, reason))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sermail_data::ContentType;

    struct Fixed(u16);

    impl Transport for Fixed {
        async fn send(&self, _request: SendRequest<'_>) -> Result<SendResult> {
            Ok(SendResult::new(self.0, "fixed"))
        }
    }

    fn message() -> Message {
        Message::builder()
            .sender("a@x.com", None)
            .unwrap()
            .subject("Hi")
            .add_content("body", ContentType::Text)
            .add_to("b@x.com", None)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_with_config_rejects_blank_url() {
        let config = ClientConfig::new().with_base_url("");
        assert!(matches!(
            Client::with_config(config, Fixed(200)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_send_checked_maps_rejection() {
        let client = Client::new(Fixed(403));
        let err = tokio_test::block_on(client.send_checked(&message())).unwrap_err();
        assert!(matches!(err, Error::Rejected { status: 403, .. }));
    }

    #[test]
    fn test_send_checked_passes_success() {
        let client = Client::new(Fixed(200));
        let result = tokio_test::block_on(client.send_checked(&message())).unwrap();
        assert_eq!(result.status, 200);
    }
}
