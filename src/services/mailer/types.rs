// Shared types for the mailer module

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during mail operations
#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Failed to send email: {0}")]
    SendError(String),

    #[error("Template rendering error: {0}")]
    TemplateError(String),

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generic email message ready for delivery
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: Option<String>,
    pub reply_to: Option<String>,
}

impl EmailMessage {
    pub fn new(from: String, to: Vec<String>, subject: String, html: String) -> Self {
        Self {
            from,
            to,
            subject,
            html,
            text: None,
            reply_to: None,
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }
}

/// Trait implemented by every message builder
pub trait MailBuilder {
    fn build(&self) -> Result<EmailMessage, MailerError>;
}

/// Template data for the reservation confirmation email
#[derive(Serialize)]
pub struct ReservationConfirmedData {
    pub customer_name: String,
    pub service_name: String,
    pub starts_at: String,
    pub salon_name: String,
    pub site_url: String,
    pub support_email: String,
}

/// Template data for the reservation cancellation email
#[derive(Serialize)]
pub struct ReservationCancelledData {
    pub customer_name: String,
    pub service_name: String,
    pub starts_at: String,
    pub salon_name: String,
    pub site_url: String,
    pub support_email: String,
}

/// Template data for the promotion announcement email
#[derive(Serialize)]
pub struct PromotionAnnouncementData {
    pub customer_name: String,
    pub promotion_title: String,
    pub promotion_description: String,
    pub discount_percent: u8,
    pub ends_on: String,
    pub salon_name: String,
    pub site_url: String,
    pub support_email: String,
}

/// Delivery provider payload.
///
/// Optional fields are omitted from the JSON body when `None` so the API
/// never receives explicit nulls.
#[derive(Debug, Serialize)]
pub struct ProviderEmailPayload {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl From<EmailMessage> for ProviderEmailPayload {
    fn from(message: EmailMessage) -> Self {
        Self {
            from: message.from,
            to: message.to,
            subject: message.subject,
            html: message.html,
            text: message.text,
            reply_to: message.reply_to,
        }
    }
}
