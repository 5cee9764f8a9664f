//! This module defines the `NameTracker` trait, the interface to the ad-hoc
//! "riding in event" name tracker used when no official event matches.
use riders_shared::types::{EventRider, RiderId};

use crate::errors::SourceError;

/// A trait that defines the interface for the riding-in-event name tracker.
#[async_trait::async_trait]
pub trait NameTracker: Send + Sync {
    /// Registers that a rider is currently riding under the given event name.
    ///
    /// Fire-and-forget: the registration has no meaningful return value and
    /// a failure to register is not surfaced.
    async fn set_riding_in_event(&self, name: &str, rider: RiderId);

    /// Fetches the current unofficial roster for the given event name.
    async fn get_riders_in_event(&self, name: &str) -> Result<Vec<EventRider>, SourceError>;
}
