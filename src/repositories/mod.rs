//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di storage per una specifica entità.
//! Le query usano `sqlx::query_as` a runtime (con `FromRow`), quindi la
//! compilazione non richiede un database raggiungibile.

pub mod memory;
pub mod message;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, MessageStore, ReadAll};

pub use memory::InMemoryMessageRepository;
pub use message::MessageRepository;
