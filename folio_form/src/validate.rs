use folio_models::contact::Draft;
use thiserror::Error;

/// Minimum length of the trimmed message, in UTF-16 code units.
pub const MIN_MESSAGE_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The message must contain at least {MIN_MESSAGE_LENGTH} characters.")]
    MessageTooShort,
}

/// Check the draft before anything is sent. The honeypot is not validated.
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    if message_length(&draft.message) < MIN_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(())
}

/// Length as a browser measures `message.trim().length`.
fn message_length(message: &str) -> usize {
    message.trim_matches(is_trimmed).encode_utf16().count()
}

/// Whitespace as trimmed by browsers: NEL is kept, the byte order mark is not.
fn is_trimmed(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_message(message: &str) -> Draft {
        Draft {
            message: message.into(),
            ..Default::default()
        }
    }

    #[test]
    fn trimmed_message_length() {
        for (message, expected) in [
            ("", Err(ValidationError::MessageTooShort)),
            ("hi", Err(ValidationError::MessageTooShort)),
            ("123456789", Err(ValidationError::MessageTooShort)),
            ("1234567890", Ok(())),
            ("Hello there, great site!", Ok(())),
            ("   hi   there   ", Ok(())),
            ("     hi       ", Err(ValidationError::MessageTooShort)),
            ("\n\t 12345678 \n", Err(ValidationError::MessageTooShort)),
            ("äöüßéèêàçñ", Ok(())),
            ("äöüßéèêàç", Err(ValidationError::MessageTooShort)),
            ("😀😀😀😀😀", Ok(())),
            ("😀😀😀😀", Err(ValidationError::MessageTooShort)),
            ("\u{feff}123456789", Err(ValidationError::MessageTooShort)),
            ("123456789\u{feff}\u{3000}", Err(ValidationError::MessageTooShort)),
            ("\u{85}12345678\u{85}", Ok(())),
        ] {
            assert_eq!(validate(&with_message(message)), expected, "{message:?}");
        }
    }

    #[test]
    fn other_fields_are_ignored() {
        let draft = Draft {
            first_name: String::new(),
            last_name: String::new(),
            email: "not an email".into(),
            message: "Hello there, great site!".into(),
            honeypot: "acme".into(),
        };

        assert_eq!(validate(&draft), Ok(()));
    }
}
