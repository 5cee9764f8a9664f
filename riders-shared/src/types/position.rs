use serde::{Deserialize, Serialize};

use crate::types::RiderId;

/// A live map position for one rider or ghost.
///
/// Beyond `id`, `x` and `y` the record is opaque: whatever extra fields the
/// position lookup or ghost source attaches (speed, heading, colour, ...)
/// are carried through unexamined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub id: RiderId,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Position {
    /// Create a position with no passthrough fields.
    pub fn new(id: RiderId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            extra: serde_json::Map::new(),
        }
    }
}
