//! Attachment sink for the transactional e-mail path.
//!
//! The PDF component does not send mail; it hands binary attachments to
//! whatever outgoing-message object the caller put on the view. Sending,
//! headers and transport belong to the mailer layer.

/// A binary attachment of an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub data: Vec<u8>,
    pub mime: String,
    pub filename: String,
}

/// A trait for collecting attachments on an outgoing message.
pub trait AttachmentSink: std::fmt::Debug {
    /// Adds one binary attachment.
    fn add_attachment(&mut self, data: Vec<u8>, mime: &str, filename: &str);
}

/// A plain outgoing e-mail message: subject, HTML body and attachments.
///
/// The rendering core only ever calls [`AttachmentSink::add_attachment`];
/// subject and body are filled in by the caller from the rendered output
/// before the message is handed to the mailer.
#[derive(Debug, Default)]
pub struct EmailMessage {
    subject: Option<String>,
    html_body: Option<String>,
    attachments: Vec<Attachment>,
}

impl EmailMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn set_html_body(&mut self, html: impl Into<String>) {
        self.html_body = Some(html.into());
    }

    pub fn html_body(&self) -> Option<&str> {
        self.html_body.as_deref()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

impl AttachmentSink for EmailMessage {
    fn add_attachment(&mut self, data: Vec<u8>, mime: &str, filename: &str) {
        self.attachments.push(Attachment {
            data,
            mime: mime.to_string(),
            filename: filename.to_string(),
        });
    }
}
