//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Text generation error: {0}")]
    TextGen(String),

    #[error("Input error: {0}")]
    Input(String),
}
