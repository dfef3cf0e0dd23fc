//! Domain value objects and validation rules.
//!
//! Everything a contact must satisfy before it is persisted lives here:
//! trimmed, length-bounded names and phone numbers, store-issued ids, and
//! the validator that checks a whole write at once.

pub mod contact_id;
pub mod errors;
pub mod name;
pub mod phone;
pub mod validation;

pub use contact_id::ContactId;
pub use errors::{FieldError, ValidationError, ValidationErrors, NAME_MAX_LEN, PHONE_MAX_LEN};
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use validation::{validate_contact, ContactDraft};
