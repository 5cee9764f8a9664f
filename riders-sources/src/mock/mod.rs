//! In-memory mock collaborators for testing and local development.
//!
//! Each mock is pre-populated through `set_*` helpers, counts how many times
//! each interface method has been invoked, and can be told to fail so that
//! error propagation is testable without a live backend.
mod events;
mod ghosts;
mod positions;
mod profile;
mod roster;
mod tracker;

pub use events::MockEventDirectory;
pub use ghosts::MockGhostSource;
pub use positions::MockPositionLookup;
pub use profile::MockProfileStore;
pub use roster::MockRosterSource;
pub use tracker::MockNameTracker;
