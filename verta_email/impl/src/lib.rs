use verta_email_contracts::{Email, EmailSendError, EmailService};

pub use resend::ResendEmailService;
pub use simulated::SimulatedEmailService;
pub use smtp::SmtpEmailService;

mod resend;
mod simulated;
mod smtp;

/// The configured email provider, or `Disabled` when the deployment has no
/// `[email]` section. `Disabled` fails every send with
/// [`EmailSendError::NotConfigured`] so the server keeps running without a
/// transport.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Smtp(SmtpEmailService),
    Resend(ResendEmailService),
    Simulated(SimulatedEmailService),
    Disabled,
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        match self {
            Self::Smtp(service) => service.send(email).await,
            Self::Resend(service) => service.send(email).await,
            Self::Simulated(service) => service.send(email).await,
            Self::Disabled => Err(EmailSendError::NotConfigured),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Smtp(service) => service.ping().await,
            Self::Resend(service) => service.ping().await,
            Self::Simulated(service) => service.ping().await,
            Self::Disabled => anyhow::bail!("email delivery is not configured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use verta_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn disabled_send_fails_as_not_configured() {
        // Arrange
        let sut = EmailServiceImpl::Disabled;

        // Act
        let result = sut.send(test_email()).await;

        // Assert
        assert_matches!(result, Err(EmailSendError::NotConfigured));
    }

    #[tokio::test]
    async fn disabled_ping_fails() {
        let sut = EmailServiceImpl::Disabled;

        let result = sut.ping().await;

        assert!(result.is_err());
    }

    fn test_email() -> Email {
        Email {
            recipient: "info@verta.builders".parse().unwrap(),
            subject: "subject".into(),
            body: verta_email_contracts::EmailBody::Plain("body".into()),
            reply_to: None,
        }
    }
}
