//! Error types for the visibility resolution engine.
//! Defines the errors surfaced to the caller of a resolution.
use riders_sources::SourceError;
use thiserror::Error;

/// Represents errors that can occur while resolving a rider's map contents.
///
/// A failing collaborator call fails the whole resolution; the engine never
/// emits a partial position list.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
