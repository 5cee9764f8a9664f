//! This module defines the `EventDirectory` trait, the interface to the
//! structured event directory and its per-subgroup rosters.
use riders_shared::types::{Event, EventRider};

use crate::errors::SourceError;

/// A trait that defines the interface for the event directory collaborator.
#[async_trait::async_trait]
pub trait EventDirectory: Send + Sync {
    /// Matches an event code or name token against the directory.
    ///
    /// # Arguments
    ///
    /// * `token` - The textual event code or event name to match.
    ///
    /// # Returns
    ///
    /// The matching `Event` if one exists, `None` if the token matches no
    /// event, or a `SourceError` if the lookup fails.
    async fn find_matching_event(&self, token: &str) -> Result<Option<Event>, SourceError>;

    /// Fetches the roster of one event subgroup.
    async fn get_riders(&self, subgroup: i64) -> Result<Vec<EventRider>, SourceError>;
}
