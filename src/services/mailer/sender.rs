// Mail delivery over the provider's HTTP API

use super::types::{EmailMessage, MailerError, ProviderEmailPayload};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Sends finished messages to the delivery provider
#[derive(Clone)]
pub struct MailSender {
    client: Arc<Client>,
    api_key: String,
    api_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl MailSender {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            api_url,
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
        }
    }

    /// Set maximum retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set base delay between retries
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Send a single message
    #[instrument(skip(self, message), fields(to = ?message.to, subject = %message.subject))]
    pub async fn send(&self, message: EmailMessage) -> Result<(), MailerError> {
        let payload: ProviderEmailPayload = message.into();

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(res) if res.status().is_success() => {
                info!("Email sent successfully");
                Ok(())
            },
            Ok(res) => {
                let status = res.status();
                let error_text = res
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                error!(
                    "Failed to send email. Status: {}, Error: {}",
                    status, error_text
                );

                if status.as_u16() == 429 {
                    Err(MailerError::RateLimitExceeded)
                } else if status.is_server_error() {
                    Err(MailerError::ServiceUnavailable)
                } else {
                    Err(MailerError::SendError(format!(
                        "Email send failed with status {}: {}",
                        status, error_text
                    )))
                }
            },
            Err(e) => {
                error!("Network error while sending email: {:?}", e);
                Err(MailerError::SendError(format!("Network error: {}", e)))
            },
        }
    }

    /// Send with retry and exponential backoff.
    ///
    /// Rate-limit responses are terminal: retrying into a 429 only extends
    /// the block.
    #[instrument(skip(self, message), fields(to = ?message.to, subject = %message.subject))]
    pub async fn send_with_retry(&self, message: EmailMessage) -> Result<(), MailerError> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.send(message.clone()).await {
                Ok(()) => return Ok(()),
                Err(MailerError::RateLimitExceeded) => {
                    warn!("Rate limit hit, not retrying");
                    return Err(MailerError::RateLimitExceeded);
                },
                Err(e) => {
                    warn!("Email send attempt {} failed: {:?}", attempt, e);
                    last_error = Some(e);

                    if attempt < self.max_retries {
                        let delay = Self::backoff_delay(self.retry_delay, attempt);
                        info!("Retrying in {:?}", delay);
                        tokio::time::sleep(delay).await;
                    }
                },
            }
        }

        Err(last_error.unwrap_or_else(|| {
            MailerError::SendError("Failed after maximum retry attempts".to_string())
        }))
    }

    /// Exponential backoff capped at 60s, with jitter so simultaneous
    /// failures don't retry in lockstep
    fn backoff_delay(base: Duration, attempt: u32) -> Duration {
        let max_delay = Duration::from_secs(60);
        let exp = 2_u32.checked_pow(attempt - 1).unwrap_or(u32::MAX);
        let delay = base.checked_mul(exp).unwrap_or(max_delay).min(max_delay);

        use rand::Rng;
        let jitter_millis = rand::thread_rng().gen_range(0..=(delay.as_millis() / 4) as u64);
        delay + Duration::from_millis(jitter_millis)
    }

    /// Check API key validity against the provider
    pub async fn health_check(&self) -> Result<(), MailerError> {
        let response = self
            .client
            .get(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await;

        match response {
            Ok(res) if res.status().as_u16() == 401 => {
                Err(MailerError::ConfigError("Invalid API key".to_string()))
            },
            Ok(_) => Ok(()),
            Err(_e) => Err(MailerError::ServiceUnavailable),
        }
    }
}
