use std::time::Duration;

use tracing::{debug, info};
use verta_email_contracts::{Email, EmailSendError, EmailService};

/// Transport for local development: waits about as long as a real provider
/// round trip, then logs the email instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedEmailService;

const DELIVERY_DELAY: Duration = Duration::from_millis(1500);

impl EmailService for SimulatedEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        tokio::time::sleep(DELIVERY_DELAY).await;

        info!(
            recipient = %email.recipient.0,
            subject = email.subject,
            "Simulated email delivery"
        );
        debug!(body = ?email.body);

        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use verta_email_contracts::EmailBody;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn send_succeeds_after_delay() {
        // Arrange
        let sut = SimulatedEmailService;
        let email = Email {
            recipient: "info@verta.builders".parse().unwrap(),
            subject: "subject".into(),
            body: EmailBody::Plain("body".into()),
            reply_to: None,
        };

        // Act
        let start = tokio::time::Instant::now();
        let result = sut.send(email).await;

        // Assert
        result.unwrap();
        assert_eq!(start.elapsed(), DELIVERY_DELAY);
    }

    #[tokio::test]
    async fn ping_always_succeeds() {
        let sut = SimulatedEmailService;

        sut.ping().await.unwrap();
    }
}
