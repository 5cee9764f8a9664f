use serde::{Deserialize, Serialize};

use crate::types::RiderId;

/// One record of the live "who is currently riding" roster.
///
/// Name fields are optional; the platform omits them for riders who have not
/// filled in a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RidingEntry {
    pub player_id: RiderId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl RidingEntry {
    pub fn new(player_id: RiderId, first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            player_id,
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }
}
