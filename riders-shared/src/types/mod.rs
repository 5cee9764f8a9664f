mod event;
mod position;
mod profile;
mod roster;

pub use event::{Event, EventRider, EventSubgroup};
pub use position::Position;
pub use profile::{Followee, Profile};
pub use roster::RidingEntry;

/// Numeric identity of a rider, as assigned by the game platform.
pub type RiderId = i64;
