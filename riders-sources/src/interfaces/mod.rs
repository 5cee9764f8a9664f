//! This module defines and re-exports the interfaces for the external
//! collaborators of the visibility engine.
//! It serves as a central point for accessing the source traits.
mod events;
mod ghosts;
mod positions;
mod profile;
mod roster;
mod tracker;

pub use events::EventDirectory;
pub use ghosts::GhostSource;
pub use positions::PositionLookup;
pub use profile::ProfileStore;
pub use roster::RosterSource;
pub use tracker::NameTracker;
