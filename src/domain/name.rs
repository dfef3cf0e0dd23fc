//! ContactName value object.

use super::errors::{ValidationError, NAME_MAX_LEN};
use serde::Serialize;
use std::fmt;

/// A contact's display name, trimmed and at most [`NAME_MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// # Errors
    ///
    /// - `ValidationError::MissingName` if nothing remains after trimming
    /// - `ValidationError::NameTooLong` if the trimmed value is too long
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        // Characters, not bytes: "José" is four long.
        if name.chars().count() > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong);
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
