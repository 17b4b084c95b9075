//! Fake mail relay exposing `POST /send_email`

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use bytes::Bytes;
use folio_models::contact::Draft;
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use url::Url;

pub const SEND_EMAIL_ROUTE: &str = "/send_email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RelayBehavior {
    /// 200 `{"ok": true}`
    Accept,
    /// 200 `{"ok": false}`
    Reject,
    /// 500 `{"ok": false}`
    Fail,
    /// 200 with a body that is not JSON
    Malformed,
}

/// A request as seen by the fake relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRequest {
    /// `None` if the body was not a JSON object.
    pub draft: Option<Draft>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FakeRelay(Arc<FakeRelayInner>);

#[derive(Debug)]
struct FakeRelayInner {
    behavior: RelayBehavior,
    received: RwLock<Vec<ReceivedRequest>>,
}

impl FakeRelay {
    pub fn new(behavior: RelayBehavior) -> Self {
        Self(Arc::new(FakeRelayInner {
            behavior,
            received: Default::default(),
        }))
    }

    pub fn router(&self) -> Router<()> {
        Router::new()
            .route(SEND_EMAIL_ROUTE, routing::post(send_email))
            .with_state(self.clone())
    }

    /// All requests received so far, oldest first.
    pub async fn received(&self) -> Vec<ReceivedRequest> {
        self.0.received.read().await.clone()
    }
}

pub async fn start_server(host: IpAddr, port: u16, behavior: RelayBehavior) -> anyhow::Result<()> {
    info!("Starting fake relay on {host}:{port}");
    info!("Send email endpoint: http://{host}:{port}{SEND_EMAIL_ROUTE}");
    info!("Answering every request with {behavior:?}");

    let router = FakeRelay::new(behavior).router();

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// A fake relay running in the background on an ephemeral loopback port.
#[derive(Debug, Clone)]
pub struct SpawnedRelay {
    /// Base url, without the `/send_email` path.
    pub url: Url,
    pub relay: FakeRelay,
}

impl SpawnedRelay {
    pub fn send_email_url(&self) -> Url {
        self.url
            .join(SEND_EMAIL_ROUTE)
            .expect("route is a valid absolute path")
    }
}

pub async fn spawn(behavior: RelayBehavior) -> anyhow::Result<SpawnedRelay> {
    let relay = FakeRelay::new(behavior);
    let router = relay.router();

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind fake relay")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(SpawnedRelay {
        url: format!("http://{addr}").parse()?,
        relay,
    })
}

async fn send_email(State(relay): State<FakeRelay>, headers: HeaderMap, body: Bytes) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    let draft = serde_json::from_slice::<Draft>(&body).ok();
    if draft.as_ref().is_some_and(|draft| !draft.honeypot.is_empty()) {
        info!("Honeypot filled in, discarding message");
    }

    relay.0.received.write().await.push(ReceivedRequest {
        draft,
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
    });

    match relay.0.behavior {
        RelayBehavior::Accept => Json(json!({"ok": true})).into_response(),
        RelayBehavior::Reject => Json(json!({"ok": false, "error": "rejected"})).into_response(),
        RelayBehavior::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"ok": false})),
        )
            .into_response(),
        RelayBehavior::Malformed => (
            [(header::CONTENT_TYPE, "text/html")],
            "<h1>Internal relay error</h1>",
        )
            .into_response(),
    }
}
