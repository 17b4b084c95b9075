use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_extern_contracts::relay::RelayApiService;
use folio_models::contact::Draft;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<RelayApi> {
    relay: RelayApi,
}

impl<RelayApi> ContactServiceImpl<RelayApi> {
    pub fn new(relay: RelayApi) -> Self {
        Self { relay }
    }
}

impl<RelayApi> ContactService for ContactServiceImpl<RelayApi>
where
    RelayApi: RelayApiService,
{
    async fn send_message(&self, draft: Draft) -> Result<(), ContactSendMessageError> {
        let response = self.relay.send_email(draft).await?;

        let ok = response.body.is_some_and(|body| body.ok);
        if !response.is_success_status() || !ok {
            warn!(
                status = response.status,
                parsed = response.body.is_some(),
                ok,
                "Relay did not accept the message"
            );
            return Err(ContactSendMessageError::Rejected);
        }

        debug!("Relay accepted the message");
        Ok(())
    }
}
