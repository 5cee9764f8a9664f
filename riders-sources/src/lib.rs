//! # Riders Sources
//! This crate provides the collaborator boundary of the rider visibility
//! engine: narrow traits for each external data source, a shared error type,
//! and complete in-memory mock implementations for testing and local
//! development.
pub mod errors;
pub mod interfaces;
pub mod mock;

pub use errors::SourceError;
pub use interfaces::{
    EventDirectory, GhostSource, NameTracker, PositionLookup, ProfileStore, RosterSource,
};
pub use mock::{
    MockEventDirectory, MockGhostSource, MockNameTracker, MockPositionLookup, MockProfileStore,
    MockRosterSource,
};
