//! This module defines the `RosterSource` trait, the interface to the live
//! "who is currently riding" roster.
use riders_shared::types::RidingEntry;

use crate::errors::SourceError;

/// A trait that defines the interface for the live-riding roster collaborator.
#[async_trait::async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetches the full current roster, unfiltered.
    async fn get(&self) -> Result<Vec<RidingEntry>, SourceError>;
}
