//! Fluent message builder.

use super::Message;
use crate::attachment::Attachment;
use crate::content::ContentBlock;
use crate::content_type::ContentType;
use crate::error::{Result, ValidationError};
use crate::headers::MessageHeaders;
use crate::mail_user::MailUser;

/// Accumulates the parts of a [`Message`].
///
/// Each recipient list has two setters, one taking an address and optional
/// display name and one taking a prebuilt [`MailUser`]. Both append to the
/// same list, so the final order is exactly the call order. Sender and
/// header "From" are single-valued; the last call wins.
///
/// Required parts are only checked by [`build`](Self::build), which borrows
/// the builder and returns an independent snapshot. The builder can keep
/// being extended and built again afterwards.
///
/// The builder has no internal synchronization; share it between threads
/// only behind external exclusion.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    sender: Option<MailUser>,
    header_from: Option<MailUser>,
    subject: Option<String>,
    content: Vec<ContentBlock>,
    to: Vec<MailUser>,
    cc: Vec<MailUser>,
    bcc: Vec<MailUser>,
    reply_to: Vec<MailUser>,
    attachments: Vec<Attachment>,
}

impl MessageBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject. An empty subject is accepted.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the sender from an address and optional display name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the address is malformed.
    pub fn sender(self, email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        Ok(self.sender_user(MailUser::from_parts(email, name)?))
    }

    /// Sets the sender.
    #[must_use]
    pub fn sender_user(mut self, sender: MailUser) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the display "From" from an address and optional display name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the address is malformed.
    pub fn header_from(self, email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        Ok(self.header_from_user(MailUser::from_parts(email, name)?))
    }

    /// Sets the display "From".
    #[must_use]
    pub fn header_from_user(mut self, header_from: MailUser) -> Self {
        self.header_from = Some(header_from);
        self
    }

    /// Appends a content block built from a body and type.
    #[must_use]
    pub fn add_content(self, body: impl Into<String>, content_type: ContentType) -> Self {
        self.add_content_block(ContentBlock::new(body, content_type))
    }

    /// Appends a content block.
    #[must_use]
    pub fn add_content_block(mut self, content: ContentBlock) -> Self {
        self.content.push(content);
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn add_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Appends a primary recipient from an address and optional name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the address is malformed.
    pub fn add_to(self, email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        Ok(self.add_to_user(MailUser::from_parts(email, name)?))
    }

    /// Appends a primary recipient.
    #[must_use]
    pub fn add_to_user(mut self, to: MailUser) -> Self {
        self.to.push(to);
        self
    }

    /// Appends a carbon-copy recipient from an address and optional name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the address is malformed.
    pub fn add_cc(self, email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        Ok(self.add_cc_user(MailUser::from_parts(email, name)?))
    }

    /// Appends a carbon-copy recipient.
    #[must_use]
    pub fn add_cc_user(mut self, cc: MailUser) -> Self {
        self.cc.push(cc);
        self
    }

    /// Appends a blind carbon-copy recipient from an address and optional
    /// name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the address is malformed.
    pub fn add_bcc(self, email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        Ok(self.add_bcc_user(MailUser::from_parts(email, name)?))
    }

    /// Appends a blind carbon-copy recipient.
    #[must_use]
    pub fn add_bcc_user(mut self, bcc: MailUser) -> Self {
        self.bcc.push(bcc);
        self
    }

    /// Appends a reply-to address from an address and optional name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the address is malformed.
    pub fn add_reply_to(self, email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        Ok(self.add_reply_to_user(MailUser::from_parts(email, name)?))
    }

    /// Appends a reply-to address.
    #[must_use]
    pub fn add_reply_to_user(mut self, reply_to: MailUser) -> Self {
        self.reply_to.push(reply_to);
        self
    }

    /// Validates the accumulated parts and returns a snapshot.
    ///
    /// Checks run in order: sender, at least one `to` recipient, subject,
    /// at least one content block.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn build(&self) -> Result<Message> {
        let Some(sender) = self.sender.clone() else {
            return Err(reject(ValidationError::MissingSender));
        };
        if self.to.is_empty() {
            return Err(reject(ValidationError::MissingRecipient));
        }
        let Some(subject) = self.subject.clone() else {
            return Err(reject(ValidationError::MissingSubject));
        };
        if self.content.is_empty() {
            return Err(reject(ValidationError::MissingContent));
        }

        let message = Message {
            sender,
            subject,
            content: self.content.clone(),
            headers: self.header_from.clone().map(MessageHeaders::new),
            to: self.to.clone(),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            reply_to: self.reply_to.clone(),
            attachments: self.attachments.clone(),
        };

        tracing::debug!(
            to = message.to.len(),
            cc = message.cc.len(),
            bcc = message.bcc.len(),
            content = message.content.len(),
            attachments = message.attachments.len(),
            "message built"
        );

        Ok(message)
    }
}

fn reject(err: ValidationError) -> crate::Error {
    tracing::trace!(field = err.field(), %err, "message rejected");
    err.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Disposition;
    use serde_json::json;

    fn minimal() -> MessageBuilder {
        MessageBuilder::new()
            .sender("a@x.com", None)
            .unwrap()
            .subject("Hi")
            .add_content("body", ContentType::Text)
            .add_to("b@x.com", Some("B"))
            .unwrap()
    }

    fn build_err(builder: &MessageBuilder) -> ValidationError {
        builder.build().unwrap_err().validation().cloned().unwrap()
    }

    #[test]
    fn test_minimal_message_payload() {
        let message = minimal().build().unwrap();
        assert_eq!(
            message.to_value().unwrap(),
            json!({
                "from": {"email": "a@x.com"},
                "subject": "Hi",
                "content": [{"body": "body", "type": "text/plain"}],
                "tos": [{"email": "b@x.com", "name": "B"}],
            })
        );
    }

    #[test]
    fn test_missing_sender() {
        let builder = MessageBuilder::new()
            .subject("Hi")
            .add_content("body", ContentType::Text)
            .add_to("b@x.com", None)
            .unwrap();
        assert_eq!(build_err(&builder), ValidationError::MissingSender);
    }

    #[test]
    fn test_missing_recipient() {
        let builder = MessageBuilder::new()
            .sender("a@x.com", None)
            .unwrap()
            .subject("Hi")
            .add_content("body", ContentType::Text)
            .add_cc("c@x.com", None)
            .unwrap();
        assert_eq!(build_err(&builder), ValidationError::MissingRecipient);
    }

    #[test]
    fn test_missing_subject() {
        let builder = MessageBuilder::new()
            .sender("a@x.com", None)
            .unwrap()
            .add_content("body", ContentType::Text)
            .add_to("b@x.com", None)
            .unwrap();
        assert_eq!(build_err(&builder), ValidationError::MissingSubject);
    }

    #[test]
    fn test_missing_content() {
        let builder = MessageBuilder::new()
            .sender("a@x.com", None)
            .unwrap()
            .subject("Hi")
            .add_to("b@x.com", None)
            .unwrap();
        assert_eq!(build_err(&builder), ValidationError::MissingContent);
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(
            build_err(&MessageBuilder::new()),
            ValidationError::MissingSender
        );
        let builder = MessageBuilder::new().sender("a@x.com", None).unwrap();
        assert_eq!(build_err(&builder), ValidationError::MissingRecipient);
        let builder = builder.add_to("b@x.com", None).unwrap();
        assert_eq!(build_err(&builder), ValidationError::MissingSubject);
        let builder = builder.subject("Hi");
        assert_eq!(build_err(&builder), ValidationError::MissingContent);
    }

    #[test]
    fn test_empty_subject_accepted() {
        let message = minimal().subject("").build().unwrap();
        assert_eq!(message.subject(), "");
    }

    #[test]
    fn test_empty_body_accepted() {
        let message = minimal().build().unwrap();
        let message2 = MessageBuilder::new()
            .sender_user(message.sender().clone())
            .subject("Hi")
            .add_content("", ContentType::Html)
            .add_to_user(message.to()[0].clone())
            .build()
            .unwrap();
        assert_eq!(message2.content()[0].body(), "");
    }

    #[test]
    fn test_setter_rejects_bad_address_eagerly() {
        let err = MessageBuilder::new().add_to("not-an-address", None).unwrap_err();
        assert!(matches!(
            err.validation(),
            Some(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_mixed_setters_preserve_call_order() {
        let message = minimal()
            .add_to_user(MailUser::new("c@x.com").unwrap())
            .add_to("d@x.com", None)
            .unwrap()
            .add_to_user(MailUser::with_name("e@x.com", "E").unwrap())
            .build()
            .unwrap();
        let emails: Vec<&str> = message.to().iter().map(MailUser::email).collect();
        assert_eq!(emails, ["b@x.com", "c@x.com", "d@x.com", "e@x.com"]);
    }

    #[test]
    fn test_content_order() {
        let message = minimal()
            .add_content_block(ContentBlock::html("<b>html</b>"))
            .add_content("tail", ContentType::Text)
            .build()
            .unwrap();
        let types: Vec<ContentType> = message
            .content()
            .iter()
            .map(ContentBlock::content_type)
            .collect();
        assert_eq!(
            types,
            [ContentType::Text, ContentType::Html, ContentType::Text]
        );
    }

    #[test]
    fn test_sender_last_write_wins() {
        let message = minimal()
            .sender("z@x.com", Some("Z"))
            .unwrap()
            .header_from("h1@x.com", None)
            .unwrap()
            .header_from_user(MailUser::new("h2@x.com").unwrap())
            .build()
            .unwrap();
        assert_eq!(message.sender().email(), "z@x.com");
        assert_eq!(message.header_from().map(MailUser::email), Some("h2@x.com"));
        assert_eq!(message.to_value().unwrap()["headers"], json!({"from": {"email": "h2@x.com"}}));
    }

    #[test]
    fn test_snapshot_isolated_from_later_mutation() {
        let builder = minimal();
        let first = builder.build().unwrap();
        let before = first.to_value().unwrap();

        let builder = builder
            .add_to("late@x.com", None)
            .unwrap()
            .add_cc("cc@x.com", None)
            .unwrap()
            .add_content("more", ContentType::Text)
            .subject("Changed");
        let second = builder.build().unwrap();

        assert_eq!(first.to_value().unwrap(), before);
        assert_eq!(first.to().len(), 1);
        assert_eq!(second.to().len(), 2);
        assert_eq!(second.subject(), "Changed");
    }

    #[test]
    fn test_optional_lists_serialized_when_present() {
        let inline = Attachment::builder()
            .from_bytes(b"png", "logo.png")
            .disposition_inline(None)
            .build()
            .unwrap();
        let file = Attachment::builder()
            .from_bytes(b"csv", "data.csv")
            .disposition(Disposition::Attachment, Some("dropped"))
            .build()
            .unwrap();

        let message = minimal()
            .add_cc("c@x.com", Some("C"))
            .unwrap()
            .add_bcc("d@x.com", None)
            .unwrap()
            .add_reply_to("noreply@x.com", Some("No Reply"))
            .unwrap()
            .add_attachment(inline.clone())
            .add_attachment(file)
            .build()
            .unwrap();
        let value = message.to_value().unwrap();

        assert_eq!(value["cc"], json!([{"email": "c@x.com", "name": "C"}]));
        assert_eq!(value["bcc"], json!([{"email": "d@x.com"}]));
        assert_eq!(
            value["replyTos"],
            json!([{"email": "noreply@x.com", "name": "No Reply"}])
        );
        let attachments = value["attachments"].as_array().unwrap();
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0]["id"], json!(inline.content_id().unwrap()));
        assert!(attachments[1].get("id").is_none());
        assert!(value.get("headers").is_none());
    }
}
