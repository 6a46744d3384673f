//! Application State - Stato globale dell'applicazione
//!
//! Contiene lo store dei messaggi, iniettato alla costruzione: in produzione
//! il repository PostgreSQL, nei test uno store in memoria o un mock.

use crate::repositories::{MessageRepository, MessageStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Store dei messaggi
    pub msg: Arc<dyn MessageStore>,
}

impl AppState {
    /// Crea una nuova istanza di AppState con il repository PostgreSQL
    /// costruito sul pool di connessioni fornito.
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(MessageRepository::new(pool))
    }

    /// Crea una nuova istanza di AppState con uno store qualsiasi
    pub fn with_store(store: impl MessageStore + 'static) -> Self {
        Self {
            msg: Arc::new(store),
        }
    }
}
