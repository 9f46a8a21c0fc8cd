use anyhow::Context;
use clap::Subcommand;
use url::Url;
use verta_config::Config;
use verta_core_contact_contracts::ContactSubmitError;
use verta_form_contracts::FormState;
use verta_form_impl::{ContactApiServiceConfig, ContactApiServiceImpl, ContactForm, ContactFormConfig};
use verta_models::locale::Locale;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a project inquiry to a running server
    Send {
        /// Base url of the server, e.g. http://127.0.0.1:8000
        #[arg(long)]
        endpoint: Url,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long)]
        message: String,
        /// Language of the submission; unrecognized values fall back to en
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
}

impl ContactCommand {
    pub async fn invoke(self, _config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                endpoint,
                name,
                email,
                company,
                message,
                locale,
            } => send(endpoint, name, email, company, message, locale).await,
        }
    }
}

async fn send(
    endpoint: Url,
    name: String,
    email: String,
    company: String,
    message: String,
    locale: Locale,
) -> anyhow::Result<()> {
    let endpoint = endpoint.join("/contact").context("Invalid endpoint url")?;

    let api = ContactApiServiceImpl::new(ContactApiServiceConfig { endpoint });
    let form = ContactForm::new(
        api,
        ContactFormConfig {
            locale,
            fallback_error: ContactSubmitError::Send.user_message(locale).into(),
        },
    );

    form.set_name(name).await;
    form.set_email(email).await;
    form.set_company(company).await;
    form.set_message(message).await;

    match form.submit().await {
        FormState::Success => {
            println!("Inquiry sent.");
            Ok(())
        }
        FormState::Error(message) => anyhow::bail!("{message}"),
        state @ (FormState::Idle | FormState::Submitting) => {
            anyhow::bail!("Unexpected form state: {state:?}")
        }
    }
}
