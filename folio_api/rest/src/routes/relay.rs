//! `POST /send_email` is passed through to the mail relay backend.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing, Router,
};
use bytes::Bytes;
use folio_extern_contracts::relay::{RelayApiService, RelayForwardRequest};
use tracing::warn;

use crate::errors::{error, BAD_GATEWAY_DETAIL};

pub fn router(service: Arc<impl RelayApiService>) -> Router<()> {
    Router::new()
        .route("/send_email", routing::post(send_email))
        .with_state(service)
}

async fn send_email(
    service: State<Arc<impl RelayApiService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    let request = RelayForwardRequest {
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
        body,
    };

    let upstream = match service.forward(request).await {
        Ok(upstream) => upstream,
        Err(err) => {
            warn!("Failed to reach the mail relay: {err:#}");
            return error(StatusCode::BAD_GATEWAY, BAD_GATEWAY_DETAIL);
        }
    };

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, Body::from(upstream.body)).into_response();
    if let Some(content_type) = upstream
        .content_type
        .and_then(|content_type| HeaderValue::from_str(&content_type).ok())
    {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }

    response
}
