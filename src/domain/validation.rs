//! Field-level validation for contact writes.

use super::errors::ValidationErrors;
use super::name::ContactName;
use super::phone::PhoneNumber;

/// Name and phone that passed validation, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: ContactName,
    pub phone: PhoneNumber,
}

/// Validate raw name and phone values.
///
/// Both fields are checked so the caller sees every problem at once; errors
/// are reported in field order (name, then phone).
pub fn validate_contact(name: &str, phone: &str) -> Result<ContactDraft, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = ContactName::new(name).map_err(|e| errors.push(e)).ok();
    let phone = PhoneNumber::new(phone).map_err(|e| errors.push(e)).ok();

    match (name, phone) {
        (Some(name), Some(phone)) => Ok(ContactDraft { name, phone }),
        _ => Err(errors),
    }
}
