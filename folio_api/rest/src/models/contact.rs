use folio_models::contact::{Draft, FormStatus};
use serde::Deserialize;

/// The posted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiContactForm {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "the_email")]
    pub message: String,
    #[serde(rename = "company")]
    pub honeypot: String,
    /// Status of the page the form was posted from
    pub status: FormStatus,
    pub action: ApiContactFormAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiContactFormAction {
    #[default]
    Submit,
    Dismiss,
}

impl From<ApiContactForm> for Draft {
    fn from(value: ApiContactForm) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            message: value.message,
            honeypot: value.honeypot,
        }
    }
}
