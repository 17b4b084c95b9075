//! The contact form controller.
//!
//! A [`ContactForm`] owns one [`FormStore`] and is driven by [`FormEvent`]s.
//! The view is recomputed from the store after every event.

use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_models::contact::{Draft, DraftField, FormStatus};
use tracing::{debug, info, warn};

pub use self::{
    store::FormStore,
    validate::{validate, ValidationError, MIN_MESSAGE_LENGTH},
    view::{render, FormView, Notification, NotificationKind, ERROR_TEXT, SUCCESS_TEXT},
};

mod store;
mod validate;
mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: DraftField, value: String },
    Submit,
    Dismiss,
}

/// Outcome of [`ContactForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already in flight.
    Ignored,
    /// The draft failed validation. Status is now `error`, nothing was sent.
    Invalid(ValidationError),
    /// Status is now `submitting`. The draft must be sent and the result
    /// passed to [`ContactForm::finish_submit`].
    Dispatch(Draft),
}

#[derive(Debug)]
pub struct ContactForm<'a, Contact> {
    contact: &'a Contact,
    store: FormStore,
}

impl<'a, Contact> ContactForm<'a, Contact> {
    pub fn new(contact: &'a Contact) -> Self {
        Self::with_state(contact, Draft::default(), FormStatus::Idle)
    }

    pub fn with_draft(contact: &'a Contact, draft: Draft) -> Self {
        Self::with_state(contact, draft, FormStatus::Idle)
    }

    /// Restore a form, e.g. from a posted HTML form.
    pub fn with_state(contact: &'a Contact, draft: Draft, status: FormStatus) -> Self {
        Self {
            contact,
            store: FormStore::new(draft, status),
        }
    }

    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    pub fn status(&self) -> FormStatus {
        self.store.status()
    }

    pub fn view(&self) -> FormView {
        render(self.store.draft(), self.store.status())
    }

    pub fn into_store(self) -> FormStore {
        self.store
    }

    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        self.store.update(field, value);
    }

    /// Close the notification. Has no effect unless the form shows one.
    pub fn dismiss(&mut self) {
        if self.store.status().is_terminal() {
            self.store.set_status(FormStatus::Idle);
        }
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.store.status() == FormStatus::Submitting {
            debug!("Submission already in flight, ignoring submit");
            return SubmitStep::Ignored;
        }

        if let Err(err) = validate(self.store.draft()) {
            info!("Not sending contact message: {err}");
            self.store.set_status(FormStatus::Error);
            return SubmitStep::Invalid(err);
        }

        self.store.set_status(FormStatus::Submitting);
        SubmitStep::Dispatch(self.store.draft().clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), ContactSendMessageError>) {
        if self.store.status() != FormStatus::Submitting {
            debug!("No submission in flight, ignoring result");
            return;
        }

        match result {
            Ok(()) => {
                info!("Contact message sent");
                self.store.clear_draft();
                self.store.set_status(FormStatus::Success);
            }
            Err(ContactSendMessageError::Rejected) => {
                warn!("Contact message was rejected by the relay");
                self.store.set_status(FormStatus::Error);
            }
            Err(ContactSendMessageError::Other(err)) => {
                warn!("Failed to send contact message: {err:#}");
                self.store.set_status(FormStatus::Error);
            }
        }
    }
}

impl<Contact> ContactForm<'_, Contact>
where
    Contact: ContactService,
{
    /// Validate the draft and, if it passes, send it and wait for the result.
    pub async fn submit(&mut self) -> FormStatus {
        if let SubmitStep::Dispatch(draft) = self.begin_submit() {
            let result = self.contact.send_message(draft).await;
            self.finish_submit(result);
        }
        self.store.status()
    }

    pub async fn dispatch(&mut self, event: FormEvent) -> FormStatus {
        match event {
            FormEvent::Edit { field, value } => self.edit(field, value),
            FormEvent::Submit => return self.submit().await,
            FormEvent::Dismiss => self.dismiss(),
        }
        self.store.status()
    }
}
