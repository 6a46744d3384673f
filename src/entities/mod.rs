//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database. La bacheca ne ha una sola:
//! `messages`, append-only.

pub mod message;

pub use message::Message;
