use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;
use verta_models::email_address::EmailAddressWithName;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the given TOML files (later files override
/// earlier ones) and finally from `VERTA__`-prefixed environment variables.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(config::Environment::with_prefix("VERTA").separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub health: HealthConfig,
    /// Where contact submissions are delivered. Without this section the
    /// server still runs, but answers submissions with a "not configured"
    /// failure.
    pub contact: Option<ContactConfig>,
    /// Outbound email transport. Optional for the same reason as `contact`.
    pub email: Option<EmailConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub from: EmailAddressWithName,
    pub provider: EmailProviderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmailProviderConfig {
    Smtp {
        url: String,
    },
    Resend {
        api_key: String,
        #[serde(default)]
        endpoint_override: Option<Url>,
    },
    Simulated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert!(config.contact.is_some());
        assert!(config.email.is_some());
    }

    #[test]
    fn parse_email_providers() {
        for (input, expected) in [
            (
                serde_json::json!({"type": "smtp", "url": "smtp://127.0.0.1:25"}),
                "smtp",
            ),
            (
                serde_json::json!({"type": "resend", "api_key": "re_123"}),
                "resend",
            ),
            (serde_json::json!({"type": "simulated"}), "simulated"),
        ] {
            let provider = serde_json::from_value::<EmailProviderConfig>(input).unwrap();

            let kind = match provider {
                EmailProviderConfig::Smtp { .. } => "smtp",
                EmailProviderConfig::Resend { .. } => "resend",
                EmailProviderConfig::Simulated => "simulated",
            };
            assert_eq!(kind, expected);
        }
    }
}
