#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use message_board::core::AppState;
use message_board::dtos::CreateMessageDTO;
use message_board::entities::Message;
use message_board::repositories::{Create, InMemoryMessageRepository, MessageStore, ReadAll};
use std::sync::Arc;

/// Crea un AppState per i test con lo store fornito
pub fn create_test_state(store: impl MessageStore + 'static) -> Arc<AppState> {
    Arc::new(AppState::with_store(store))
}

/// Crea un AppState con uno store in memoria vuoto
pub fn create_memory_state() -> Arc<AppState> {
    create_test_state(InMemoryMessageRepository::new())
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = message_board::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Store che simula un database irraggiungibile
pub struct UnavailableStore;

#[async_trait]
impl Create<Message, CreateMessageDTO> for UnavailableStore {
    async fn create(&self, _data: &CreateMessageDTO) -> Result<Message, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl ReadAll<Message> for UnavailableStore {
    async fn read_all(&self) -> Result<Vec<Message>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
