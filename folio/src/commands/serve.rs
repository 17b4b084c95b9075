use folio_config::Config;
use tracing::info;

use crate::environment::Provider;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!(
        "Forwarding /send_email to {}",
        config.relay.backend_url.send_email_url()
    );

    let provider = Provider::new(&config)?;
    let server = provider.rest_server();
    server.serve(config.http.host, config.http.port).await
}
