//! Builds a message with inline and file attachments and prints the payload
//! a transport would receive.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p sermail --example dry_run
//! ```

use sermail::{
    Attachment, Client, ClientConfig, ContentType, Message, SendRequest, SendResult, Transport,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Transport that prints the request instead of sending it.
struct DryRun;

impl Transport for DryRun {
    async fn send(&self, request: SendRequest<'_>) -> sermail::Result<SendResult> {
        println!("POST {}", request.url);
        println!("{}", serde_json::to_string_pretty(request.payload)?);
        Ok(SendResult::new(202, "Accepted (dry run)"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sermail=info,sermail_data=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let logo = Attachment::builder()
        .from_bytes(b"\x89PNG\r\n\x1a\n", "logo_b.png")
        .disposition_inline(None)
        .build()?;
    let cid = logo.content_id().unwrap_or_default().to_string();

    let message = Message::builder()
        .subject("This is a test email")
        .sender("sender@example.com", Some("Joe Sender"))?
        .add_content("This is a test message", ContentType::Text)
        .add_content(
            format!("<b>Dynamic CID</b><br><img src=\"cid:{cid}\">"),
            ContentType::Html,
        )
        .add_attachment(logo)
        .add_to("recipient1@example.com", Some("Recipient 1"))?
        .add_cc("cc1@example.com", Some("CC Recipient 1"))?
        .add_attachment(
            Attachment::builder()
                .from_base64("VGhpcyBpcyBhIHRlc3Qh", "test.txt")?
                .build()?,
        )
        .add_attachment(
            Attachment::builder()
                .from_bytes(b"Sample bytes", "bytes.txt")
                .mime_type("text/plain")
                .build()?,
        )
        .header_from("fancysender@example.com", Some("Header From"))?
        .add_reply_to("noreply@example.com", Some("No Reply"))?
        .build()?;

    let client = Client::with_config(ClientConfig::default(), DryRun)?;
    let result = client.send(&message).await?;

    println!("HTTP Response: {}/{}", result.status, result.reason);
    println!("Message ID: {:?}", result.message_id);
    println!("Request ID: {:?}", result.request_id);

    Ok(())
}
