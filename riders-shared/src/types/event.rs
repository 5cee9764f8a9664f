use serde::{Deserialize, Serialize};

use crate::types::RiderId;

/// A structured event from the event directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_subgroups: Vec<EventSubgroup>,
}

/// A named partition of an event (e.g. a start pen or category).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSubgroup {
    pub id: i64,
    pub label: String,
}

/// One roster record of an event subgroup or of an unofficial
/// riding-in-event list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRider {
    pub id: RiderId,
}

impl EventRider {
    pub fn new(id: RiderId) -> Self {
        Self { id }
    }
}
