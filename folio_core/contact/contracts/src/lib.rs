use std::future::Future;

use folio_models::contact::Draft;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Send the draft to the mail relay.
    ///
    /// Succeeds only if the relay answered with a 2xx status and a body
    /// declaring `"ok": true`.
    fn send_message(
        &self,
        draft: Draft,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    /// The relay answered, but did not confirm delivery.
    #[error("The relay did not accept the message.")]
    Rejected,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(
        mut self,
        draft: Draft,
        result: Result<(), ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
