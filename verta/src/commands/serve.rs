use tracing::{info, warn};
use verta_config::Config;
use verta_di::Provide;
use verta_email_contracts::EmailService;

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::connect(config.email.as_ref())?;
    if config.email.is_some() {
        // A failed ping is not fatal: the transport may come up later, and
        // every send failure is reported to the submitter anyway.
        match email.ping().await {
            Ok(()) => info!("Email transport is ready"),
            Err(err) => warn!("Email transport is not ready: {err:#}"),
        }
    } else {
        warn!("No [email] section configured, contact submissions will be rejected");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
