use crate::domain::{ContactDraft, ContactId};
use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Each method is a single-document operation. A missing record is not an
/// error at this level: lookups return `None` and deletes return `false`,
/// leaving the caller to decide how "not found" is reported.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every contact, newest-created first.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>>;

    /// Insert a new contact; the store assigns the id and timestamps.
    async fn create(&self, draft: &ContactDraft) -> StoreResult<Contact>;

    /// Replace name and phone, returning the post-update record.
    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> StoreResult<Option<Contact>>;

    /// Remove a contact. Returns whether a record was deleted.
    async fn delete(&self, id: &ContactId) -> StoreResult<bool>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
