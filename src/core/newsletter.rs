use crate::domain::model::SubscribeAck;
use crate::domain::ports::Delay;
use crate::utils::error::Result;
use crate::utils::validation;
use std::time::Duration;

/// Simulated newsletter signup. No mail is sent; the ack only feeds the
/// transient confirmation in the view layer.
pub struct NewsletterSignup<D: Delay> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> NewsletterSignup<D> {
    pub fn new(delay: D, latency_ms: u64) -> Self {
        Self {
            delay,
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub async fn subscribe(&self, email: &str) -> Result<SubscribeAck> {
        validation::validate_email(email)?;

        if !self.latency.is_zero() {
            self.delay.wait(self.latency).await;
        }

        tracing::info!("📧 Subscribed: {}", email);
        Ok(SubscribeAck {
            email: email.to_string(),
            subscribed: true,
        })
    }
}
