use anyhow::anyhow;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::warn;
use verta_email_contracts::{Email, EmailBody, EmailSendError, EmailService};
use verta_models::email_address::EmailAddressWithName;
use verta_utils::Apply;

#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    pub fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(
                email.reply_to.map(|reply_to| reply_to.0),
                MessageBuilder::reply_to,
            )
            .subject(email.subject);

        let message = match email.body {
            EmailBody::Plain(text) => builder.header(header::ContentType::TEXT_PLAIN).body(text),
            EmailBody::PlainAndHtml { plain, html } => {
                builder.multipart(MultiPart::alternative_plain_html(plain, html))
            }
        }
        .map_err(anyhow::Error::from)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(anyhow::Error::from)?;

        if response.is_positive() {
            Ok(())
        } else {
            warn!(code = %response.code(), "The smtp server rejected the email");
            Err(EmailSendError::Rejected)
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
