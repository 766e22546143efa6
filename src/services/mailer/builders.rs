// Message builders, one per template

use super::types::{
    EmailMessage, MailBuilder, MailerError, PromotionAnnouncementData, ReservationCancelledData,
    ReservationConfirmedData,
};
use crate::app_config::MailerConfig;
use crate::models::promotion::Promotion;
use crate::models::reservation::Reservation;
use handlebars::Handlebars;
use tracing::instrument;

fn format_sender(config: &MailerConfig) -> String {
    format!("{} <{}>", config.from_name, config.from_email)
}

/// Builder for reservation confirmation emails
pub struct ReservationConfirmedBuilder<'a> {
    reservation: &'a Reservation,
    config: &'a MailerConfig,
    templates: &'a Handlebars<'a>,
}

impl<'a> ReservationConfirmedBuilder<'a> {
    pub fn new(
        reservation: &'a Reservation,
        config: &'a MailerConfig,
        templates: &'a Handlebars<'a>,
    ) -> Self {
        Self {
            reservation,
            config,
            templates,
        }
    }
}

impl<'a> MailBuilder for ReservationConfirmedBuilder<'a> {
    #[instrument(skip(self))]
    fn build(&self) -> Result<EmailMessage, MailerError> {
        let starts_at = self
            .reservation
            .starts_at
            .format("%A, %B %e %Y at %H:%M")
            .to_string();

        let data = ReservationConfirmedData {
            customer_name: self.reservation.customer_name.clone(),
            service_name: self.reservation.service_name.clone(),
            starts_at: starts_at.clone(),
            salon_name: self.config.from_name.clone(),
            site_url: self.config.site_url.clone(),
            support_email: self.config.support_email.clone(),
        };

        let html = self
            .templates
            .render("reservation_confirmed", &data)
            .map_err(|e| MailerError::TemplateError(e.to_string()))?;

        let text = format!(
            "Hi {},\n\n\
            Your appointment for {} on {} is confirmed.\n\n\
            Need to reschedule? Reply to this email or contact {}.\n\n\
            See you soon,\n\
            {}",
            self.reservation.customer_name,
            self.reservation.service_name,
            starts_at,
            self.config.support_email,
            self.config.from_name
        );

        Ok(EmailMessage::new(
            format_sender(self.config),
            vec![self.reservation.customer_email.clone()],
            format!("Your {} appointment is confirmed", self.reservation.service_name),
            html,
        )
        .with_text(text))
    }
}

/// Builder for reservation cancellation emails
pub struct ReservationCancelledBuilder<'a> {
    reservation: &'a Reservation,
    config: &'a MailerConfig,
    templates: &'a Handlebars<'a>,
}

impl<'a> ReservationCancelledBuilder<'a> {
    pub fn new(
        reservation: &'a Reservation,
        config: &'a MailerConfig,
        templates: &'a Handlebars<'a>,
    ) -> Self {
        Self {
            reservation,
            config,
            templates,
        }
    }
}

impl<'a> MailBuilder for ReservationCancelledBuilder<'a> {
    #[instrument(skip(self))]
    fn build(&self) -> Result<EmailMessage, MailerError> {
        let starts_at = self
            .reservation
            .starts_at
            .format("%A, %B %e %Y at %H:%M")
            .to_string();

        let data = ReservationCancelledData {
            customer_name: self.reservation.customer_name.clone(),
            service_name: self.reservation.service_name.clone(),
            starts_at: starts_at.clone(),
            salon_name: self.config.from_name.clone(),
            site_url: self.config.site_url.clone(),
            support_email: self.config.support_email.clone(),
        };

        let html = self
            .templates
            .render("reservation_cancelled", &data)
            .map_err(|e| MailerError::TemplateError(e.to_string()))?;

        let text = format!(
            "Hi {},\n\n\
            Your appointment for {} on {} has been cancelled.\n\n\
            You can book a new visit any time at {}.\n\n\
            Best regards,\n\
            {}",
            self.reservation.customer_name,
            self.reservation.service_name,
            starts_at,
            self.config.site_url,
            self.config.from_name
        );

        Ok(EmailMessage::new(
            format_sender(self.config),
            vec![self.reservation.customer_email.clone()],
            format!("Your {} appointment was cancelled", self.reservation.service_name),
            html,
        )
        .with_text(text))
    }
}

/// Builder for promotion announcement emails
pub struct PromotionAnnouncementBuilder<'a> {
    to_email: &'a str,
    customer_name: &'a str,
    promotion: &'a Promotion,
    config: &'a MailerConfig,
    templates: &'a Handlebars<'a>,
}

impl<'a> PromotionAnnouncementBuilder<'a> {
    pub fn new(
        to_email: &'a str,
        customer_name: &'a str,
        promotion: &'a Promotion,
        config: &'a MailerConfig,
        templates: &'a Handlebars<'a>,
    ) -> Self {
        Self {
            to_email,
            customer_name,
            promotion,
            config,
            templates,
        }
    }
}

impl<'a> MailBuilder for PromotionAnnouncementBuilder<'a> {
    #[instrument(skip(self))]
    fn build(&self) -> Result<EmailMessage, MailerError> {
        let ends_on = self.promotion.ends_on.format("%B %e, %Y").to_string();

        let data = PromotionAnnouncementData {
            customer_name: self.customer_name.to_string(),
            promotion_title: self.promotion.title.clone(),
            promotion_description: self.promotion.description.clone(),
            discount_percent: self.promotion.discount_percent,
            ends_on: ends_on.clone(),
            salon_name: self.config.from_name.clone(),
            site_url: self.config.site_url.clone(),
            support_email: self.config.support_email.clone(),
        };

        let html = self
            .templates
            .render("promotion_announcement", &data)
            .map_err(|e| MailerError::TemplateError(e.to_string()))?;

        let text = format!(
            "Hi {},\n\n\
            {}: {}\n\n\
            {}% off until {}. Book at {}.\n\n\
            Best regards,\n\
            {}",
            self.customer_name,
            self.promotion.title,
            self.promotion.description,
            self.promotion.discount_percent,
            ends_on,
            self.config.site_url,
            self.config.from_name
        );

        Ok(EmailMessage::new(
            format_sender(self.config),
            vec![self.to_email.to_string()],
            format!("{}: {}% off", self.promotion.title, self.promotion.discount_percent),
            html,
        )
        .with_text(text))
    }
}
