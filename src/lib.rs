//! Message board - bacheca di messaggi append-only su PostgreSQL
//!
//! Espone i moduli principali per il binario e per i test di integrazione.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod render;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(index))
        .route("/add", post(add_message))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
