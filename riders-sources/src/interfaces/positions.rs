//! This module defines the `PositionLookup` trait, the injected per-id
//! live-position function.
use riders_shared::types::{Position, RiderId};

use crate::errors::SourceError;

/// A trait that abstracts the live-position lookup injected into each rider
/// session.
///
/// The engine treats it as an opaque async function from id to position
/// record; transport and protocol are the implementor's concern. One call is
/// made per resolved id per invocation — positions are never cached.
#[async_trait::async_trait]
pub trait PositionLookup: Send + Sync {
    /// Fetches the current live position of one rider.
    async fn position_of(&self, rider: RiderId) -> Result<Position, SourceError>;
}
