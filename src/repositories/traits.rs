//! Common repository traits
//!
//! This module defines generic interfaces for database operations. They are
//! declared through `async_trait` so a store can live behind `Arc<dyn MessageStore>`.

use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use async_trait::async_trait;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
#[async_trait]
pub trait Create<Entity, CreateDTO: Sync> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading every entity of a table
#[async_trait]
pub trait ReadAll<Entity> {
    /// Reads all entities, in the order defined by the repository
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All entities (can be empty)
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Storage for the message board.
///
/// `read_all` must return messages newest first: `created_at` descending, then
/// `id` descending for equal timestamps. `create` assigns `id` and `created_at`
/// itself and does no validation.
pub trait MessageStore:
    Create<Message, CreateMessageDTO> + ReadAll<Message> + Send + Sync
{
}

impl<T> MessageStore for T where
    T: Create<Message, CreateMessageDTO> + ReadAll<Message> + Send + Sync
{
}
