//! Mock ghost-position source.
use std::sync::RwLock;

use riders_shared::types::Position;

use crate::interfaces::GhostSource;

/// Mock ghost source returning a pre-configured list of positions.
pub struct MockGhostSource {
    positions: RwLock<Vec<Position>>,
}

impl MockGhostSource {
    /// Create a new mock with no ghosts.
    pub fn new() -> Self {
        Self {
            positions: RwLock::new(Vec::new()),
        }
    }

    /// Replace the current ghost records.
    pub fn set_positions(&self, positions: Vec<Position>) {
        *self.positions.write().unwrap() = positions;
    }
}

impl Default for MockGhostSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostSource for MockGhostSource {
    fn get_positions(&self) -> Vec<Position> {
        self.positions.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghosts_round_trip() {
        let ghosts = MockGhostSource::new();
        assert!(ghosts.get_positions().is_empty());

        ghosts.set_positions(vec![Position::new(-1, 1.5, 2.5)]);
        let positions = ghosts.get_positions();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].id, -1);
    }
}
