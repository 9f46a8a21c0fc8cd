use std::sync::Arc;

use types::Email;
use verta_config::Config;
use verta_core_contact_impl::ContactServiceConfig;
use verta_core_health_impl::HealthServiceConfig;
use verta_di::provider;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // Core
            ContactServiceConfig,
            HealthServiceConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // Core
        contact_service_config: ContactServiceConfig,
        health_service_config: HealthServiceConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Core
        let contact_service_config = ContactServiceConfig {
            recipient: config
                .contact
                .as_ref()
                .map(|contact| Arc::new(contact.recipient.clone())),
        };

        let health_service_config = HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // Core
            contact_service_config,
            health_service_config,
        })
    }
}
