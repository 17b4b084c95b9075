use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The in-progress, unsubmitted contact form data.
///
/// Field names on the wire (JSON payloads and HTML form inputs) differ from
/// the Rust names: the message travels as `the_email` and the honeypot as
/// `company`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "the_email")]
    pub message: String,
    /// Hidden anti-bot field. Humans never see it, so it stays empty for
    /// legitimate submissions.
    #[serde(rename = "company")]
    pub honeypot: String,
}

impl Draft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Message => &self.message,
            DraftField::Honeypot => &self.honeypot,
        }
    }

    pub fn get_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Message => &mut self.message,
            DraftField::Honeypot => &mut self.honeypot,
        }
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Message,
    Honeypot,
}

impl DraftField {
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Message,
        Self::Honeypot,
    ];

    /// Name of the field in JSON payloads and HTML forms.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "the_email",
            Self::Honeypot => "company",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown draft field: {0:?}")]
pub struct UnknownDraftField(pub String);

impl FromStr for DraftField {
    type Err = UnknownDraftField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| UnknownDraftField(s.into()))
    }
}

/// Status of a contact form. Exactly one value holds at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// Whether the status is one a notification is shown for.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn draft_serializes_with_wire_names() {
        let draft = Draft {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            message: "Hello there, great site!".into(),
            honeypot: String::new(),
        };

        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            value,
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@x.com",
                "the_email": "Hello there, great site!",
                "company": "",
            })
        );
    }

    #[test]
    fn draft_deserializes_missing_fields_as_empty() {
        let draft = serde_json::from_value::<Draft>(json!({"the_email": "hi"})).unwrap();

        assert_eq!(draft.message, "hi");
        assert!(draft.first_name.is_empty());
        assert!(draft.honeypot.is_empty());
    }

    #[test]
    fn field_accessors_cover_every_field() {
        let mut draft = Draft::default();
        for field in DraftField::ALL {
            draft.get_mut(field).push_str(field.wire_name());
        }

        for field in DraftField::ALL {
            assert_eq!(draft.get(field), field.wire_name());
        }
        assert_eq!(draft.message, "the_email");
        assert_eq!(draft.honeypot, "company");
    }

    #[test]
    fn parse_field() {
        for field in DraftField::ALL {
            assert_eq!(field.to_string().parse::<DraftField>(), Ok(field));
        }
        assert_matches!("message".parse::<DraftField>(), Err(UnknownDraftField(_)));
    }

    #[test]
    fn is_empty() {
        assert!(Draft::default().is_empty());
        assert!(!Draft {
            honeypot: "bot".into(),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn terminal_status() {
        assert!(!FormStatus::Idle.is_terminal());
        assert!(!FormStatus::Submitting.is_terminal());
        assert!(FormStatus::Success.is_terminal());
        assert!(FormStatus::Error.is_terminal());
    }
}
