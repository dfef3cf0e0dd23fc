use crate::db::Database;
use crate::domain::{ContactDraft, ContactId};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;

const SELECT_COLUMNS: &str = "id, name, phone, created_at, updated_at";

/// Raw row as stored; timestamps are microseconds since the Unix epoch.
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: String,
    name: String,
    phone: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ContactRow> for Contact {
    type Error = StoreError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: &str| StoreError::Corrupt {
            id: row.id.clone(),
            reason: reason.to_string(),
        };

        let created_at = DateTime::from_timestamp_micros(row.created_at)
            .ok_or_else(|| corrupt("created_at out of range"))?;
        let updated_at = DateTime::from_timestamp_micros(row.updated_at)
            .ok_or_else(|| corrupt("updated_at out of range"))?;
        let id = ContactId::new(row.id.clone()).map_err(|e| corrupt(&e.to_string()))?;

        Ok(Contact {
            id,
            name: row.name,
            phone: row.phone,
            created_at,
            updated_at,
        })
    }
}

/// Current time at the precision the store keeps.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Contact repository backed by SQLite.
///
/// Every operation first asks the [`Database`] for its pool, so the store
/// is opened on first use and reused afterwards.
pub struct SqliteContactRepository {
    db: Arc<Database>,
}

impl SqliteContactRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let pool = self.db.connect().await?;

        // rowid breaks ties between records created in the same microsecond
        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM contacts ORDER BY created_at DESC, rowid DESC"
        ))
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        let pool = self.db.connect().await?;

        let row: Option<ContactRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM contacts WHERE id = ?"
        ))
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn create(&self, draft: &ContactDraft) -> StoreResult<Contact> {
        let pool = self.db.connect().await?;
        let contact = Contact::from_draft(ContactId::generate(), draft, now());

        sqlx::query(
            "INSERT INTO contacts (id, name, phone, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(contact.id.as_str())
        .bind(contact.name.as_str())
        .bind(contact.phone.as_str())
        .bind(contact.created_at.timestamp_micros())
        .bind(contact.updated_at.timestamp_micros())
        .execute(pool)
        .await?;

        Ok(contact)
    }

    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> StoreResult<Option<Contact>> {
        let pool = self.db.connect().await?;

        // MAX keeps updated_at strictly increasing within a single statement.
        let row: Option<ContactRow> = sqlx::query_as(&format!(
            "UPDATE contacts \
             SET name = ?, phone = ?, updated_at = MAX(?, updated_at + 1) \
             WHERE id = ? \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(draft.name.as_str())
        .bind(draft.phone.as_str())
        .bind(now().timestamp_micros())
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<bool> {
        let pool = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.as_str())
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        let pool = self.db.connect().await?;
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
