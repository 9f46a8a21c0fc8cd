use anyhow::Context;
use verta_config::{EmailConfig, EmailProviderConfig};
use verta_email_impl::{
    EmailServiceImpl, ResendEmailService, SimulatedEmailService, SmtpEmailService,
};

/// Build the email transport selected by the config, or the disabled
/// transport when there is no `[email]` section.
pub fn connect(config: Option<&EmailConfig>) -> anyhow::Result<EmailServiceImpl> {
    let Some(config) = config else {
        return Ok(EmailServiceImpl::Disabled);
    };

    match &config.provider {
        EmailProviderConfig::Smtp { url } => SmtpEmailService::new(url, config.from.clone())
            .map(EmailServiceImpl::Smtp)
            .context("Failed to create the smtp transport"),
        EmailProviderConfig::Resend {
            api_key,
            endpoint_override,
        } => ResendEmailService::new(
            api_key.clone(),
            config.from.clone(),
            endpoint_override.clone(),
        )
        .map(EmailServiceImpl::Resend)
        .context("Failed to create the resend client"),
        EmailProviderConfig::Simulated => Ok(EmailServiceImpl::Simulated(SimulatedEmailService)),
    }
}
