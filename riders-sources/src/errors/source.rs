//! Error type shared by every collaborator source.
use thiserror::Error;

/// Represents a failed call across the collaborator boundary.
///
/// A failed source call is propagated to the caller unchanged; the engine
/// performs no retries and emits no partial results. A lookup that finds
/// nothing (e.g. an unknown event token) is not an error.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
