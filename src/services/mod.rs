//! Services module - Coordinatore per tutti i service handler HTTP

pub mod message;

pub use message::{add_message, index};

use crate::dtos::HealthDTO;
use axum::Json;
use chrono::Utc;
use tracing::debug;

/// Liveness check, risponde sempre 200
pub async fn health() -> Json<HealthDTO> {
    debug!("Health check requested");
    Json(HealthDTO::ok_at(Utc::now()))
}
