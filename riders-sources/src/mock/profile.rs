//! Mock profile store for testing without a live platform account.
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use riders_shared::types::{Followee, Profile, RiderId};

use crate::errors::SourceError;
use crate::interfaces::ProfileStore;

/// Mock profile store backed by in-memory maps.
pub struct MockProfileStore {
    profiles: RwLock<HashMap<RiderId, Profile>>,
    followees: RwLock<HashMap<RiderId, Vec<Followee>>>,
    profile_calls: AtomicUsize,
    followee_calls: AtomicUsize,
}

impl MockProfileStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            followees: RwLock::new(HashMap::new()),
            profile_calls: AtomicUsize::new(0),
            followee_calls: AtomicUsize::new(0),
        }
    }

    /// Register a profile to be returned for its own id.
    pub fn set_profile(&self, profile: Profile) {
        self.profiles.write().unwrap().insert(profile.id, profile);
    }

    /// Register the followee ids of a rider.
    pub fn set_followees(&self, rider: RiderId, followee_ids: &[RiderId]) {
        let followees = followee_ids.iter().copied().map(Followee::of).collect();
        self.followees.write().unwrap().insert(rider, followees);
    }

    /// Number of `get_profile` calls made so far.
    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    /// Number of `get_followees` calls made so far.
    pub fn followee_calls(&self) -> usize {
        self.followee_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn get_profile(&self, rider: RiderId) -> Result<Profile, SourceError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .read()
            .unwrap()
            .get(&rider)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("profile {rider} not in mock")))
    }

    async fn get_followees(&self, rider: RiderId) -> Result<Vec<Followee>, SourceError> {
        self.followee_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .followees
            .read()
            .unwrap()
            .get(&rider)
            .cloned()
            .unwrap_or_default())
    }
}
