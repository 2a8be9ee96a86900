//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{ChatTurn, Role, OFF_TOPIC_REPLY, UNAVAILABLE_REPLY};
pub use errors::DomainError;
