//! ContactId value object.

use super::errors::ValidationError;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a stored contact.
///
/// Ids are generated by the store when a contact is created and never
/// change afterwards. Lookups accept any non-empty string: an id that was
/// never issued simply resolves to no record.
///
/// # Example
///
/// ```
/// use contacts_api::domain::ContactId;
///
/// let id = ContactId::new("0b5c9f4e-2a55-4f4c-9d0e-3f0c1e2d7a11").unwrap();
/// assert_eq!(id.as_str(), "0b5c9f4e-2a55-4f4c-9d0e-3f0c1e2d7a11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Wrap an id received from a caller or read back from the store.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Issue a fresh id for a new record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
