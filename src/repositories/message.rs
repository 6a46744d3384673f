//! MessageRepository - Repository per la gestione dei messaggi su PostgreSQL

use super::{Create, ReadAll};
use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use async_trait::async_trait;
use sqlx::{Error, PgPool};
use tracing::{debug, instrument};

// I cast rendono la decodifica indipendente dalla variante dello schema
// (SERIAL o BIGSERIAL, TIMESTAMP o TIMESTAMPTZ).

// MESSAGE REPO
pub struct MessageRepository {
    connection_pool: PgPool,
}

impl MessageRepository {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl Create<Message, CreateMessageDTO> for MessageRepository {
    #[instrument(skip(self, data), fields(author_len = data.author.len(), content_len = data.content.len()))]
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        // una sola insert atomica, created_at lo decide il database
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (author, content, created_at)
            VALUES ($1, $2, NOW())
            RETURNING
                id::int8 AS id,
                author,
                content,
                created_at::timestamptz AS created_at
            "#,
        )
        .bind(&data.author)
        .bind(&data.content)
        .fetch_one(&self.connection_pool)
        .await?;

        debug!(message_id = message.id, "Message inserted");
        Ok(message)
    }
}

#[async_trait]
impl ReadAll<Message> for MessageRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Message>, Error> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT
                id::int8 AS id,
                author,
                content,
                created_at::timestamptz AS created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Fetched {} messages", messages.len());
        Ok(messages)
    }
}
