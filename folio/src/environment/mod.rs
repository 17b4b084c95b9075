use folio_config::Config;
use folio_extern_impl::relay::RelayApiServiceConfig;
use tracing::debug;
use types::{Contact, RelayApi, RestServer, Templates};

pub mod types;

/// Builds the services from the configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    relay: RelayApi,
    templates: Templates,
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let send_email_url = config.relay.backend_url.send_email_url();
        debug!(%send_email_url, "Using mail relay");

        Ok(Self {
            relay: RelayApi::new(RelayApiServiceConfig::new(send_email_url))?,
            templates: Templates::new()?,
        })
    }

    pub fn contact(&self) -> Contact {
        Contact::new(self.relay.clone())
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(self.contact(), self.relay.clone(), self.templates.clone())
    }
}
