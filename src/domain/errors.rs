//! Domain validation errors.

use serde::Serialize;
use std::fmt;

/// Maximum length of a contact name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a phone number, in characters.
pub const PHONE_MAX_LEN: usize = 20;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The name is empty after trimming.
    MissingName,

    /// The name exceeds [`NAME_MAX_LEN`] characters.
    NameTooLong,

    /// The phone number is empty after trimming.
    MissingPhone,

    /// The phone number exceeds [`PHONE_MAX_LEN`] characters.
    PhoneTooLong,
}

impl ValidationError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId => "id",
            Self::MissingName | Self::NameTooLong => "name",
            Self::MissingPhone | Self::PhoneTooLong => "phone",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::MissingName => write!(f, "Please provide a name"),
            Self::NameTooLong => {
                write!(f, "Name cannot be more than {} characters", NAME_MAX_LEN)
            }
            Self::MissingPhone => write!(f, "Please provide a phone number"),
            Self::PhoneTooLong => write!(
                f,
                "Phone number cannot be more than {} characters",
                PHONE_MAX_LEN
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// One failing field, as reported to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every validation failure found for a contact, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Flatten into `{field, message}` pairs for the response body.
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.0
            .iter()
            .map(|e| FieldError {
                field: e.field(),
                message: e.to_string(),
            })
            .collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact validation failed: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
