use std::future::Future;

use bytes::Bytes;
use folio_models::contact::Draft;

/// Client for the mail relay backend's `/send_email` endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayApiService: Send + Sync + 'static {
    /// Post the draft as JSON and return the raw outcome.
    ///
    /// Returns an error only if no response could be received at all. Any
    /// HTTP status is returned as a [`RelayResponse`], with `body` set to
    /// `None` if it could not be parsed.
    fn send_email(
        &self,
        draft: Draft,
    ) -> impl Future<Output = anyhow::Result<RelayResponse>> + Send;

    /// Pass a request through to the relay unchanged.
    fn forward(
        &self,
        request: RelayForwardRequest,
    ) -> impl Future<Output = anyhow::Result<RelayForwardResponse>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Option<RelayResponseBody>,
}

impl RelayResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayResponseBody {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayForwardRequest {
    pub content_type: Option<String>,
    /// Sent as `*/*` if missing.
    pub accept: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayForwardResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[cfg(feature = "mock")]
impl MockRelayApiService {
    pub fn with_send_email(mut self, draft: Draft, result: RelayResponse) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_email_unreachable(mut self, draft: Draft) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "Failed to connect to relay"
                ))))
            });
        self
    }

    pub fn with_forward(
        mut self,
        request: RelayForwardRequest,
        result: RelayForwardResponse,
    ) -> Self {
        self.expect_forward()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_forward_unreachable(mut self, request: RelayForwardRequest) -> Self {
        self.expect_forward()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "Failed to connect to relay"
                ))))
            });
        self
    }
}
