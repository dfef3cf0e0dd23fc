use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use contacts_api::domain::{ContactDraft, ContactId};
use contacts_api::error::{StoreError, StoreResult};
use contacts_api::models::Contact;
use contacts_api::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in memory, stamps them from a deterministic clock that
/// advances one second per write, counts method calls, and can be switched
/// into a failing mode to simulate an unreachable store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    clock: Arc<AtomicI64>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            clock: Arc::new(AtomicI64::new(1_700_000_000)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Add a contact to the mock repository as-is.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("mock store unreachable".to_string()));
        }
        Ok(())
    }

    fn tick(&self) -> DateTime<Utc> {
        let secs = self.clock.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0).unwrap()
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a contact with fixed timestamps.
#[allow(dead_code)]
pub fn sample_contact(id: &str, name: &str, phone: &str, created_secs: i64) -> Contact {
    let at = Utc.timestamp_opt(created_secs, 0).unwrap();
    Contact {
        id: ContactId::new(id).unwrap(),
        name: name.to_string(),
        phone: phone.to_string(),
        created_at: at,
        updated_at: at,
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("list")?;

        let contacts = self.contacts.lock().unwrap();
        let mut result: Vec<Contact> = contacts.iter().rev().cloned().collect();
        // Stable sort keeps later inserts first among equal timestamps.
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("get")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| &c.id == id).cloned())
    }

    async fn create(&self, draft: &ContactDraft) -> StoreResult<Contact> {
        self.track_call("create")?;

        let contact = Contact::from_draft(ContactId::generate(), draft, self.tick());
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> StoreResult<Option<Contact>> {
        self.track_call("update")?;

        let now = self.tick();
        let mut contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter_mut().find(|c| &c.id == id).map(|contact| {
            contact.name = draft.name.as_str().to_string();
            contact.phone = draft.phone.as_str().to_string();
            contact.updated_at = now.max(contact.updated_at + Duration::microseconds(1));
            contact.clone()
        }))
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<bool> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);
        Ok(contacts.len() < before)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.track_call("ping")
    }
}
