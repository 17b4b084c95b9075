use folio_models::contact::{Draft, FormStatus};
use serde::Serialize;

pub const SUCCESS_TEXT: &str = "Message sent successfully. I'll be in touch!";
pub const ERROR_TEXT: &str = "Could not send your message. Please try again.";

/// Everything needed to draw the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
    pub status: FormStatus,
    pub submit_disabled: bool,
    pub show_spinner: bool,
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

pub fn render(draft: &Draft, status: FormStatus) -> FormView {
    let submitting = status == FormStatus::Submitting;
    let notification = match status {
        FormStatus::Success => Some(Notification {
            kind: NotificationKind::Success,
            text: SUCCESS_TEXT,
        }),
        FormStatus::Error => Some(Notification {
            kind: NotificationKind::Error,
            text: ERROR_TEXT,
        }),
        FormStatus::Idle | FormStatus::Submitting => None,
    };

    FormView {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        email: draft.email.clone(),
        message: draft.message.clone(),
        honeypot: draft.honeypot.clone(),
        status,
        submit_disabled: submitting,
        show_spinner: submitting,
        notification,
    }
}
