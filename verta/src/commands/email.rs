use anyhow::Context;
use clap::Subcommand;
use verta_config::Config;
use verta_email_contracts::{Email, EmailBody, EmailService};
use verta_models::email_address::EmailAddressWithName;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(config.email.as_ref())?;

    email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: EmailBody::Plain("Email deliverability seems to be working!".into()),
            reply_to: None,
        })
        .await
        .context("Failed to send email")?;

    Ok(())
}
