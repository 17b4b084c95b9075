use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use folio_core_contact_contracts::ContactService;
use folio_extern_contracts::relay::RelayApiService;
use folio_templates_contracts::TemplateService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Relay, Templates> {
    contact: Contact,
    relay: Relay,
    templates: Templates,
}

impl<Contact, Relay, Templates> RestServer<Contact, Relay, Templates>
where
    Contact: ContactService,
    Relay: RelayApiService,
    Templates: TemplateService,
{
    pub fn new(contact: Contact, relay: Relay, templates: Templates) -> Self {
        Self {
            contact,
            relay,
            templates,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        info!("Starting REST API server on {host}:{port}");

        let router = self.router();
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        axum::serve(listener, router)
            .await
            .context("Failed to start HTTP server")
    }

    fn router(self) -> Router<()> {
        let contact = routes::contact::ContactPage {
            contact: self.contact,
            templates: self.templates,
        };

        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(Arc::new(contact)))
            .merge(routes::relay::router(Arc::new(self.relay)));

        // The trace span reads the request id, so request_id must be the outer layer.
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use folio_core_contact_contracts::MockContactService;
    use folio_extern_contracts::relay::MockRelayApiService;
    use folio_templates_contracts::MockTemplateService;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn request_id_header() {
        // Arrange
        let sut = RestServer::new(
            MockContactService::new(),
            MockRelayApiService::new(),
            MockTemplateService::new(),
        )
        .router();

        // Act
        let response = sut
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let request_id = response.headers().get("X-Request-Id").unwrap();
        // 16 bytes, base64 without padding
        assert_eq!(request_id.len(), 22);
    }

    #[tokio::test]
    async fn unknown_route() {
        let sut = RestServer::new(
            MockContactService::new(),
            MockRelayApiService::new(),
            MockTemplateService::new(),
        )
        .router();

        let response = sut
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("X-Request-Id"));
    }
}
