use std::sync::Arc;

use anyhow::Context;
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::warn;
use verta_email_contracts::{Email, EmailBody, EmailSendError, EmailService};
use verta_models::email_address::EmailAddressWithName;

const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct ResendEmailService {
    from: EmailAddressWithName,
    api_key: Arc<str>,
    endpoint: Arc<Url>,
    client: Client,
}

impl ResendEmailService {
    pub fn new(
        api_key: String,
        from: EmailAddressWithName,
        endpoint_override: Option<Url>,
    ) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };

        Ok(Self {
            from,
            api_key: api_key.into(),
            endpoint: Arc::new(endpoint),
            client: Client::new(),
        })
    }
}

impl EmailService for ResendEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let request = SendEmailRequest::new(&self.from, &email);

        let response = self
            .client
            .post((*self.endpoint).clone())
            .bearer_auth(&*self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, body, "The resend api rejected the email");
        Err(EmailSendError::Rejected)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let url = self
            .endpoint
            .join("domains")
            .context("Failed to derive the resend ping endpoint")?;

        self.client
            .get(url)
            .bearer_auth(&*self.api_key)
            .send()
            .await?
            .error_for_status()
            .context("Failed to ping the resend api")?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [String; 1],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<String>,
}

impl<'a> SendEmailRequest<'a> {
    fn new(from: &EmailAddressWithName, email: &'a Email) -> Self {
        let (text, html) = match &email.body {
            EmailBody::Plain(text) => (Some(text.as_str()), None),
            EmailBody::PlainAndHtml { plain, html } => {
                (Some(plain.as_str()), Some(html.as_str()))
            }
        };

        Self {
            from: from.0.to_string(),
            to: [email.recipient.0.to_string()],
            subject: &email.subject,
            text,
            html,
            reply_to: email
                .reply_to
                .as_ref()
                .map(|reply_to| reply_to.0.to_string()),
        }
    }
}
