//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed reply for questions classified as outside the assistant's specialty.
/// Never model-generated.
pub const OFF_TOPIC_REPLY: &str = "I'm sorry, but I can only help with cybersecurity topics. \
     Please ask me about threats, vulnerabilities, network defense, encryption, \
     or other security matters.";

/// Fixed reply when a remote call fails. Never model-generated.
pub const UNAVAILABLE_REPLY: &str = "Apologies, I'm having technical difficulties answering \
     right now. Please try again in a moment.";

/// A single turn in the conversation, as rendered by the UI.
/// Lives only in memory for the duration of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
