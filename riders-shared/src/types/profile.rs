use serde::{Deserialize, Serialize};

use crate::types::RiderId;

/// A rider's profile as returned by the profile store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: RiderId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Profile {
    pub fn new(id: RiderId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
        }
    }
}

/// One followee relation from a rider's social graph.
///
/// Mirrors the platform response shape: each relation wraps the followee's
/// profile rather than a bare id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Followee {
    pub followee_profile: Profile,
}

impl Followee {
    pub fn of(id: RiderId) -> Self {
        Self {
            followee_profile: Profile::new(id),
        }
    }
}
