//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Text-generation gateway. One opaque prompt in, one opaque text response out.
///
/// No streaming, no session: nothing is carried between calls. The port
/// applies no retry or timeout of its own; a hung remote service hangs
/// the caller.
#[async_trait::async_trait]
pub trait TextGenPort: Send + Sync {
    /// Submit a single prompt and return the model's full text response.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
