//! PhoneNumber value object.

use super::errors::{ValidationError, PHONE_MAX_LEN};
use serde::Serialize;
use std::fmt;

/// A contact's phone number.
///
/// Construction trims surrounding whitespace and enforces presence and a
/// maximum of [`PHONE_MAX_LEN`] characters. The format itself is free-form:
/// extensions, letters and local notations are all stored as typed.
///
/// # Example
///
/// ```
/// use contacts_api::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("  +1 555 0100 ").unwrap();
/// assert_eq!(phone.as_str(), "+1 555 0100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// # Errors
    ///
    /// - `ValidationError::MissingPhone` if nothing remains after trimming
    /// - `ValidationError::PhoneTooLong` if the trimmed value is too long
    pub fn new(phone: &str) -> Result<Self, ValidationError> {
        let phone = phone.trim();

        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if phone.chars().count() > PHONE_MAX_LEN {
            return Err(ValidationError::PhoneTooLong);
        }

        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
