//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, independent of any record type.

/// Errors that can occur within the resource framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Store has no ids left to assign")]
    IdsExhausted,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
