//! Mock riding-in-event name tracker.
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use riders_shared::types::{EventRider, RiderId};

use crate::errors::SourceError;
use crate::interfaces::NameTracker;

/// Mock name tracker.
///
/// Registrations made through `set_riding_in_event` are recorded for
/// inspection but do not feed the unofficial rosters, which tests seed
/// explicitly via [`MockNameTracker::set_riders`].
pub struct MockNameTracker {
    rosters: RwLock<HashMap<String, Vec<EventRider>>>,
    registrations: RwLock<Vec<(String, RiderId)>>,
    get_calls: AtomicUsize,
}

impl MockNameTracker {
    /// Create a new empty mock tracker.
    pub fn new() -> Self {
        Self {
            rosters: RwLock::new(HashMap::new()),
            registrations: RwLock::new(Vec::new()),
            get_calls: AtomicUsize::new(0),
        }
    }

    /// Seed the unofficial roster for an event name.
    pub fn set_riders(&self, name: &str, rider_ids: &[RiderId]) {
        let riders = rider_ids.iter().copied().map(EventRider::new).collect();
        self.rosters.write().unwrap().insert(name.to_string(), riders);
    }

    /// All `(name, rider)` registrations made so far, in call order.
    pub fn registrations(&self) -> Vec<(String, RiderId)> {
        self.registrations.read().unwrap().clone()
    }

    /// Number of `get_riders_in_event` calls made so far.
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockNameTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameTracker for MockNameTracker {
    async fn set_riding_in_event(&self, name: &str, rider: RiderId) {
        self.registrations
            .write()
            .unwrap()
            .push((name.to_string(), rider));
    }

    async fn get_riders_in_event(&self, name: &str) -> Result<Vec<EventRider>, SourceError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rosters
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registrations_are_recorded_in_order() {
        let tracker = MockNameTracker::new();
        tracker.set_riding_in_event("fondo", 10101).await;
        tracker.set_riding_in_event("fondo", 20102).await;

        assert_eq!(
            tracker.registrations(),
            vec![("fondo".to_string(), 10101), ("fondo".to_string(), 20102)]
        );
    }

    #[tokio::test]
    async fn test_unseeded_name_has_empty_roster() {
        let tracker = MockNameTracker::new();
        let riders = tracker.get_riders_in_event("fondo").await.unwrap();
        assert!(riders.is_empty());
        assert_eq!(tracker.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_seeded_roster_round_trip() {
        let tracker = MockNameTracker::new();
        tracker.set_riders("fondo", &[20102, 10101, 40104]);

        let riders = tracker.get_riders_in_event("fondo").await.unwrap();
        let ids: Vec<_> = riders.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![20102, 10101, 40104]);
    }
}
