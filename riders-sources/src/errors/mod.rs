//! Error types for the collaborator sources.
//! Consolidates and re-exports errors raised at the source boundary.
mod source;

pub use source::SourceError;
