//! Mock live-position lookup.
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use riders_shared::types::{Position, RiderId};

use crate::errors::SourceError;
use crate::interfaces::PositionLookup;

/// Mock position lookup.
///
/// Ids without a registered position resolve to the origin, so tests only
/// seed coordinates when they assert on them. Individual ids can be made to
/// fail to exercise error propagation.
pub struct MockPositionLookup {
    positions: RwLock<HashMap<RiderId, Position>>,
    failing: RwLock<HashSet<RiderId>>,
    calls: AtomicUsize,
}

impl MockPositionLookup {
    /// Create a new mock lookup.
    pub fn new() -> Self {
        Self {
            positions: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashSet::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Register the position returned for one rider.
    pub fn set_position(&self, position: Position) {
        self.positions.write().unwrap().insert(position.id, position);
    }

    /// Make every lookup of the given rider fail.
    pub fn fail_for(&self, rider: RiderId) {
        self.failing.write().unwrap().insert(rider);
    }

    /// Number of `position_of` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPositionLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PositionLookup for MockPositionLookup {
    async fn position_of(&self, rider: RiderId) -> Result<Position, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.read().unwrap().contains(&rider) {
            return Err(SourceError::Backend(format!(
                "injected lookup failure for {rider}"
            )));
        }
        Ok(self
            .positions
            .read()
            .unwrap()
            .get(&rider)
            .cloned()
            .unwrap_or_else(|| Position::new(rider, 0.0, 0.0)))
    }
}
