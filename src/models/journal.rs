use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub title: String,
    pub content: String,
}

/// Entry plus the sentiment tone shown next to it in the journal list.
#[derive(Debug, Serialize)]
pub struct EntryWithTone {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub tone: &'static str,
}
