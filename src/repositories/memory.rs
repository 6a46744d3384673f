//! InMemoryMessageRepository - store volatile con lo stesso contratto di ordinamento
//! del repository PostgreSQL. Usato nei test e per girare senza database.

use super::{Create, ReadAll};
use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Error;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea un repository già popolato, utile per i test di rendering.
    /// I messaggi vengono inseriti così come sono, id e timestamp compresi.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: RwLock::new(messages),
        }
    }
}

#[async_trait]
impl Create<Message, CreateMessageDTO> for InMemoryMessageRepository {
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        let mut messages = self.messages.write().await;
        let id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let message = Message {
            id,
            author: data.author.clone(),
            content: data.content.clone(),
            created_at: Utc::now(),
        };
        messages.push(message.clone());
        Ok(message)
    }
}

#[async_trait]
impl ReadAll<Message> for InMemoryMessageRepository {
    async fn read_all(&self) -> Result<Vec<Message>, Error> {
        let mut snapshot = self.messages.read().await.clone();
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(snapshot)
    }
}
