//! Message entity - Entità messaggio

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub author: String,
    pub content: String,
    // assegnato dallo store al momento dell'inserimento, mai dal client
    pub created_at: DateTime<Utc>,
}
