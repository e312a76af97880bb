//! Transactional Mail API
//!
//! Sends mail messages as multipart form data. Messages carry up to
//! 50 recipients (to, cc, and bcc combined), 10 attachments, and 3 tags.
//!
//! ## Example
//!
//! ```ignore
//! use salesfly::api::mail::MailMessage;
//!
//! let mut message = MailMessage::new(
//!     "ola@example.com",
//!     "Invoice #42",
//!     "Please find your invoice attached.",
//!     &["kari@example.com"],
//! );
//! message.attach_file("invoice.pdf").await?;
//!
//! let receipt = mail_api.send(&message).await?;
//! println!("accepted: {}", receipt.accepted_recipients);
//! ```

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::api::r#trait::{SalesflyApi, SalesflyContext};
use crate::error::{Result, SalesflyError};

/// Maximum number of recipients per message (to + cc + bcc).
pub const MAX_RECIPIENTS: usize = 50;
/// Maximum number of attachments per message.
pub const MAX_ATTACHMENTS: usize = 10;
/// Maximum number of tags per message.
pub const MAX_TAGS: usize = 3;

/// Delivery receipt returned after a message is accepted.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailReceipt {
    /// Message identifier assigned by the API
    pub id: String,
    pub accepted_recipients: u32,
    pub rejected_recipients: u32,
}

/// A file attached to a [`MailMessage`].
#[derive(Debug, Clone)]
pub struct Attachment {
    file_name: String,
    content: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// A mail message to be sent with [`MailApi::send`].
#[derive(Debug, Clone)]
pub struct MailMessage {
    /// Override the Date header; defaults to the server's receive time.
    pub date: Option<DateTime<Utc>>,
    pub from: String,
    pub from_name: Option<String>,
    pub reply_to: Option<String>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    /// Plain text body
    pub text: String,
    /// HTML body, sent alongside the plain text part when set
    pub html: Option<String>,
    pub charset: Option<String>,
    pub encoding: Option<String>,

    /// Require TLS delivery to the receiving server.
    pub require_tls: Option<bool>,
    /// Verify the receiving server's certificate.
    pub verify_cert: Option<bool>,
    pub open_tracking: Option<bool>,
    pub click_tracking: Option<bool>,
    pub text_click_tracking: Option<bool>,
    pub unsubscribe_tracking: Option<bool>,
    /// Validate the message without delivering it.
    pub test_mode: Option<bool>,

    attachments: Vec<Attachment>,
    tags: Vec<String>,
}

impl MailMessage {
    /// Create a message with the required fields.
    pub fn new(
        from: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
        to: &[&str],
    ) -> Self {
        Self {
            date: None,
            from: from.into(),
            from_name: None,
            reply_to: None,
            to: to.iter().map(|s| s.to_string()).collect(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            text: text.into(),
            html: None,
            charset: None,
            encoding: None,
            require_tls: None,
            verify_cert: None,
            open_tracking: None,
            click_tracking: None,
            text_click_tracking: None,
            unsubscribe_tracking: None,
            test_mode: None,
            attachments: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn add_cc(&mut self, cc: impl Into<String>) {
        self.cc.push(cc.into());
    }

    pub fn add_bcc(&mut self, bcc: impl Into<String>) {
        self.bcc.push(bcc.into());
    }

    /// Add a tag. Tags beyond [`MAX_TAGS`] are ignored.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        if self.tags.len() < MAX_TAGS {
            self.tags.push(tag.into());
        }
    }

    /// Attach in-memory content. Attachments beyond [`MAX_ATTACHMENTS`]
    /// are ignored.
    pub fn add_attachment(&mut self, file_name: impl Into<String>, content: Vec<u8>) {
        if self.attachments.len() < MAX_ATTACHMENTS {
            self.attachments.push(Attachment::new(file_name, content));
        }
    }

    /// Read a file from disk and attach it under its base name.
    pub async fn attach_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        self.add_attachment(file_name, content);
        Ok(())
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.from.trim().is_empty() {
            return Err(SalesflyError::Config(
                "mail message requires a from address".to_string(),
            ));
        }
        if self.to.is_empty() {
            return Err(SalesflyError::Config(
                "mail message requires at least one recipient".to_string(),
            ));
        }
        if self.recipient_count() > MAX_RECIPIENTS {
            return Err(SalesflyError::Config(format!(
                "mail message exceeds {MAX_RECIPIENTS} recipients"
            )));
        }
        Ok(())
    }

    /// Flatten the message into multipart form fields. Unset options
    /// produce no field; list fields repeat.
    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();

        if let Some(date) = &self.date {
            form = form.text("date", date.to_rfc3339());
        }

        form = form.text("from", self.from.clone());
        if let Some(from_name) = &self.from_name {
            form = form.text("from_name", from_name.clone());
        }

        for to in &self.to {
            form = form.text("to", to.clone());
        }
        for cc in &self.cc {
            form = form.text("cc", cc.clone());
        }
        for bcc in &self.bcc {
            form = form.text("bcc", bcc.clone());
        }

        form = form.text("subject", self.subject.clone());
        form = form.text("text", self.text.clone());
        if let Some(html) = &self.html {
            form = form.text("html", html.clone());
        }

        for tag in &self.tags {
            form = form.text("tags", tag.clone());
        }

        if let Some(charset) = &self.charset {
            form = form.text("charset", charset.clone());
        }
        if let Some(encoding) = &self.encoding {
            form = form.text("encoding", encoding.clone());
        }
        if let Some(reply_to) = &self.reply_to {
            form = form.text("reply_to", reply_to.clone());
        }

        for attachment in &self.attachments {
            let part =
                Part::bytes(attachment.content.clone()).file_name(attachment.file_name.clone());
            form = form.part("attachments", part);
        }

        let flags = [
            ("require_tls", self.require_tls),
            ("verify_cert", self.verify_cert),
            ("open_tracking", self.open_tracking),
            ("click_tracking", self.click_tracking),
            ("text_click_tracking", self.text_click_tracking),
            ("unsubscribe_tracking", self.unsubscribe_tracking),
            ("test_mode", self.test_mode),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                form = form.text(name, value.to_string());
            }
        }

        form
    }
}

/// Transactional Mail API
pub struct MailApi {
    context: Arc<SalesflyContext>,
}

impl MailApi {
    /// Create a new MailApi instance
    pub fn new(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }

    /// Send a mail message
    ///
    /// POST /v1/mail/send (multipart form data)
    ///
    /// # Errors
    /// Returns `SalesflyError::Config` when the message has no sender,
    /// no recipients, or too many recipients; API and transport failures
    /// map per the shared envelope rules.
    pub async fn send(&self, message: &MailMessage) -> Result<MailReceipt> {
        message.validate()?;
        self.context
            .client
            .post_multipart("/v1/mail/send", message.to_form())
            .await
    }
}

impl SalesflyApi for MailApi {
    fn context(&self) -> &SalesflyContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "mail"
    }
}
