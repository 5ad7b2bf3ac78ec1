//! Outgoing mail assembly and validation.
//!
//! The mail form is validated before any transport I/O: recipient and
//! subject are mandatory, and attaching the document requires a file
//! name for it. Delivery itself is behind [`MailTransport`].

use async_trait::async_trait;
use scandeck_core::{ExportError, Page};

/// One outgoing message carrying the scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Free-text message body.
    pub message: String,
    /// File name for the attached PDF, when the document is attached.
    pub pdf_name: Option<String>,
}

impl OutgoingMail {
    /// Validates the message fields.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.to.trim().is_empty() {
            return Err(ExportError::InvalidMail {
                reason: "recipient address is required".to_string(),
            });
        }
        if self.subject.trim().is_empty() {
            return Err(ExportError::InvalidMail {
                reason: "subject is required".to_string(),
            });
        }
        if matches!(&self.pdf_name, Some(name) if name.trim().is_empty()) {
            return Err(ExportError::InvalidMail {
                reason: "attachment file name is required".to_string(),
            });
        }
        Ok(())
    }

    /// Whether the scanned document should be attached.
    pub fn attaches_document(&self) -> bool {
        self.pdf_name.is_some()
    }
}

/// Delivers an outgoing message.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends `mail`, rendering and attaching `pages` as a PDF when
    /// the message asks for one.
    async fn send(&self, mail: &OutgoingMail, pages: &[Page]) -> Result<(), ExportError>;
}
