//! Contact model: the persisted record and the inbound write payload.

use crate::domain::{ContactDraft, ContactId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-issued identifier
    pub id: ContactId,

    /// Trimmed display name
    pub name: String,

    /// Trimmed phone number
    pub phone: String,

    /// Set once when the record is created
    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build a brand-new record from a validated draft.
    pub fn from_draft(id: ContactId, draft: &ContactDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.as_str().to_string(),
            phone: draft.phone.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of a create or update request.
///
/// Fields stay optional so an absent field can be reported as
/// "Name and phone are required" instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactInput {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactInput {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone: Some(phone.into()),
        }
    }

    /// Both fields when each is present and non-empty.
    ///
    /// Whitespace-only values count as present here; trimming and the
    /// blank check belong to validation.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        match (self.name.as_deref(), self.phone.as_deref()) {
            (Some(name), Some(phone)) if !name.is_empty() && !phone.is_empty() => {
                Some((name, phone))
            }
            _ => None,
        }
    }
}
