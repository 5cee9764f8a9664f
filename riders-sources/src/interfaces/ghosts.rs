//! This module defines the `GhostSource` trait, the interface to the
//! ghost-position source.
use riders_shared::types::Position;

/// A trait that defines the interface for the ghost-position collaborator.
///
/// Ghost records already carry their own coordinates, so the source is
/// synchronous and needs no per-id lookup.
pub trait GhostSource: Send + Sync {
    /// Returns the current ghost position records.
    fn get_positions(&self) -> Vec<Position>;
}
