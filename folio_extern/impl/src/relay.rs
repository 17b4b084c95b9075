use std::sync::Arc;

use anyhow::Context;
use folio_extern_contracts::relay::{
    RelayApiService, RelayForwardRequest, RelayForwardResponse, RelayResponse, RelayResponseBody,
};
use folio_models::contact::Draft;
use folio_utils::Apply;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::http::HttpClient;

const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct RelayApiServiceImpl {
    config: RelayApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct RelayApiServiceConfig {
    send_email_endpoint: Arc<Url>,
}

impl RelayApiServiceConfig {
    pub fn new(send_email_endpoint: Url) -> Self {
        Self {
            send_email_endpoint: send_email_endpoint.into(),
        }
    }
}

impl RelayApiServiceImpl {
    pub fn new(config: RelayApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            http: HttpClient::new()?,
        })
    }
}

impl RelayApiService for RelayApiServiceImpl {
    async fn send_email(&self, draft: Draft) -> anyhow::Result<RelayResponse> {
        let response = self
            .http
            .post((*self.config.send_email_endpoint).clone())
            .header(ACCEPT, APPLICATION_JSON)
            .json(&draft)
            .send()
            .await
            .context("Failed to send relay request")?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<SendEmailResponse>(&bytes)
                .inspect_err(|err| debug!(%status, "Relay returned an unparsable body: {err}"))
                .ok()
                .map(Into::into),
            Err(err) => {
                warn!(%status, "Failed to read relay response body: {err}");
                None
            }
        };

        Ok(RelayResponse {
            status: status.as_u16(),
            body,
        })
    }

    async fn forward(&self, request: RelayForwardRequest) -> anyhow::Result<RelayForwardResponse> {
        let response = self
            .http
            .post((*self.config.send_email_endpoint).clone())
            .apply_map(request.content_type, |builder, content_type| {
                builder.header(CONTENT_TYPE, content_type)
            })
            .apply_map(request.accept, |builder, accept| builder.header(ACCEPT, accept))
            .body(request.body)
            .send()
            .await
            .context("Failed to forward request to relay")?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(Into::into);
        let body = response
            .bytes()
            .await
            .context("Failed to read forwarded relay response")?;

        Ok(RelayForwardResponse {
            status,
            content_type,
            body,
        })
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    ok: bool,
}

impl From<SendEmailResponse> for RelayResponseBody {
    fn from(value: SendEmailResponse) -> Self {
        Self { ok: value.ok }
    }
}
