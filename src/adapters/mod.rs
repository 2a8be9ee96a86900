//! Infrastructure adapters. Implement ports.
//!
//! LLM API, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
