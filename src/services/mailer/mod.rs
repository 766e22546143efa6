// Mailer module: template registry, builders and delivery

pub mod builders;
pub mod sender;
pub mod types;

use self::types::MailBuilder;
use crate::app_config::MailerConfig;
use crate::models::promotion::Promotion;
use crate::models::reservation::Reservation;
use anyhow::Result;
use builders::{
    PromotionAnnouncementBuilder, ReservationCancelledBuilder, ReservationConfirmedBuilder,
};
use handlebars::Handlebars;
use sender::MailSender;
use std::sync::Arc;
use tracing::{info, instrument};

/// Sends the platform's transactional email
#[derive(Clone)]
pub struct MailerService {
    sender: MailSender,
    config: MailerConfig,
    templates: Arc<Handlebars<'static>>,
}

impl MailerService {
    pub fn new(config: MailerConfig) -> Result<Self> {
        let mut templates = Handlebars::new();
        Self::register_templates(&mut templates)?;

        let sender = MailSender::new(config.api_url.clone(), config.api_key.clone())
            .with_max_retries(3)
            .with_retry_delay(std::time::Duration::from_secs(1));

        Ok(Self {
            sender,
            config,
            templates: Arc::new(templates),
        })
    }

    /// Register all email templates
    fn register_templates(templates: &mut Handlebars) -> Result<(), types::MailerError> {
        let reservation_confirmed =
            include_str!("../../../templates/email/reservation_confirmed.html");
        templates
            .register_template_string("reservation_confirmed", reservation_confirmed)
            .map_err(|e| types::MailerError::TemplateError(e.to_string()))?;

        let reservation_cancelled =
            include_str!("../../../templates/email/reservation_cancelled.html");
        templates
            .register_template_string("reservation_cancelled", reservation_cancelled)
            .map_err(|e| types::MailerError::TemplateError(e.to_string()))?;

        let promotion_announcement =
            include_str!("../../../templates/email/promotion_announcement.html");
        templates
            .register_template_string("promotion_announcement", promotion_announcement)
            .map_err(|e| types::MailerError::TemplateError(e.to_string()))?;

        Ok(())
    }

    /// Whether delivery credentials were supplied at startup
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Notify a customer that their reservation is confirmed
    #[instrument(skip(self, reservation), fields(to = %reservation.customer_email))]
    pub async fn send_reservation_confirmed(
        &self,
        reservation: &Reservation,
    ) -> Result<(), types::MailerError> {
        info!("Sending reservation confirmation");

        let builder = ReservationConfirmedBuilder::new(reservation, &self.config, &self.templates);
        let message = builder.build()?;
        self.sender.send_with_retry(message).await
    }

    /// Notify a customer that their reservation was cancelled
    #[instrument(skip(self, reservation), fields(to = %reservation.customer_email))]
    pub async fn send_reservation_cancelled(
        &self,
        reservation: &Reservation,
    ) -> Result<(), types::MailerError> {
        info!("Sending reservation cancellation notice");

        let builder = ReservationCancelledBuilder::new(reservation, &self.config, &self.templates);
        let message = builder.build()?;
        self.sender.send_with_retry(message).await
    }

    /// Announce a promotion to a subscribed customer
    #[instrument(skip(self, promotion))]
    pub async fn send_promotion_announcement(
        &self,
        to_email: &str,
        customer_name: &str,
        promotion: &Promotion,
    ) -> Result<(), types::MailerError> {
        info!("Sending promotion announcement to {}", to_email);

        let builder = PromotionAnnouncementBuilder::new(
            to_email,
            customer_name,
            promotion,
            &self.config,
            &self.templates,
        );
        let message = builder.build()?;
        self.sender.send_with_retry(message).await
    }

    /// Check the delivery provider is reachable with our credentials
    pub async fn health_check(&self) -> Result<(), MailerError> {
        self.sender.health_check().await
    }
}

// Re-export commonly used types for convenience
pub use types::{EmailMessage, MailerError};
