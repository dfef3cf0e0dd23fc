//! Contact service layer.
//!
//! Business rules for the contact list: presence checks, field validation,
//! and turning repository outcomes into `ContactError`s.

use crate::domain::{validate_contact, ContactDraft, ContactId};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactInput};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, newest-created first.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// Validate and store a new contact.
    async fn create_contact(&self, input: ContactInput) -> ContactResult<Contact>;

    /// Fetch one contact.
    async fn get_contact(&self, id: &str) -> ContactResult<Contact>;

    /// Replace a contact's name and phone.
    async fn update_contact(&self, id: &str, input: ContactInput) -> ContactResult<Contact>;

    /// Remove a contact.
    async fn delete_contact(&self, id: &str) -> ContactResult<()>;

    /// Verify the store is reachable.
    async fn check_health(&self) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Presence check followed by field validation.
    fn validate_input(input: &ContactInput) -> ContactResult<ContactDraft> {
        let (name, phone) = input.required_fields().ok_or_else(|| {
            debug!("Name or phone missing in request body");
            ContactError::MissingFields
        })?;

        validate_contact(name, phone).map_err(|errors| {
            warn!(errors = %errors, "Contact failed validation");
            ContactError::Validation(errors)
        })
    }

    /// Any id that was never issued resolves to "not found".
    fn parse_id(id: &str) -> ContactResult<ContactId> {
        ContactId::new(id).map_err(|_| ContactError::NotFound)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        debug!("Fetching contacts");
        let contacts = self.repository.list().await.map_err(|e| {
            error!(error = %e, "Error fetching contacts");
            ContactError::from(e)
        })?;
        debug!(count = contacts.len(), "Fetched contacts");
        Ok(contacts)
    }

    async fn create_contact(&self, input: ContactInput) -> ContactResult<Contact> {
        let draft = Self::validate_input(&input)?;

        let contact = self.repository.create(&draft).await.map_err(|e| {
            error!(error = %e, "Error creating contact");
            ContactError::from(e)
        })?;

        info!(contact_id = %contact.id, "Created contact");
        Ok(contact)
    }

    async fn get_contact(&self, id: &str) -> ContactResult<Contact> {
        let id = Self::parse_id(id)?;

        self.repository
            .get(&id)
            .await
            .map_err(|e| {
                error!(contact_id = %id, error = %e, "Error fetching contact");
                ContactError::from(e)
            })?
            .ok_or(ContactError::NotFound)
    }

    async fn update_contact(&self, id: &str, input: ContactInput) -> ContactResult<Contact> {
        // Validation comes before the existence check.
        let draft = Self::validate_input(&input)?;
        let id = Self::parse_id(id)?;

        let contact = self
            .repository
            .update(&id, &draft)
            .await
            .map_err(|e| {
                error!(contact_id = %id, error = %e, "Error updating contact");
                ContactError::from(e)
            })?
            .ok_or(ContactError::NotFound)?;

        info!(contact_id = %contact.id, "Updated contact");
        Ok(contact)
    }

    async fn delete_contact(&self, id: &str) -> ContactResult<()> {
        let id = Self::parse_id(id)?;

        let deleted = self.repository.delete(&id).await.map_err(|e| {
            error!(contact_id = %id, error = %e, "Error deleting contact");
            ContactError::from(e)
        })?;

        if !deleted {
            return Err(ContactError::NotFound);
        }

        info!(contact_id = %id, "Deleted contact");
        Ok(())
    }

    async fn check_health(&self) -> ContactResult<()> {
        self.repository.ping().await.map_err(|e| {
            error!(error = %e, "Contact store unavailable");
            ContactError::from(e)
        })
    }
}
