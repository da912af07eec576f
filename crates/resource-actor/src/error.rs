//! Common error types shared by all actors and clients.

/// Errors produced by the actor runtime itself.
///
/// Entity-level failures travel in `EntityError`, which boxes the resource's
/// own error type; domain clients downcast it back to recover the typed
/// error.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
