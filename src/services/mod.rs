//! Application service layer.
//!
//! Services contain the business rules and orchestrate calls into the
//! repositories. They sit between the HTTP handlers and data access.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
