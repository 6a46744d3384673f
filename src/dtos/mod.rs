//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (form HTML / JSON) dalla
//! rappresentazione interna (entities).

pub mod health;
pub mod message;

pub use health::HealthDTO;
pub use message::{CreateMessageDTO, SubmissionDTO, validate_submission};
