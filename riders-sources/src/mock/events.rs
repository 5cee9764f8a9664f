//! Mock event directory with pre-registered events and subgroup rosters.
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use riders_shared::types::{Event, EventRider, RiderId};

use crate::errors::SourceError;
use crate::interfaces::EventDirectory;

/// Mock event directory.
///
/// Events are matched by the exact token they were registered under, which
/// is how tests pin the code-vs-name disambiguation behavior.
pub struct MockEventDirectory {
    events: RwLock<HashMap<String, Event>>,
    subgroup_riders: RwLock<HashMap<i64, Vec<EventRider>>>,
    find_calls: AtomicUsize,
    rider_calls: AtomicUsize,
}

impl MockEventDirectory {
    /// Create a new empty mock directory.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            subgroup_riders: RwLock::new(HashMap::new()),
            find_calls: AtomicUsize::new(0),
            rider_calls: AtomicUsize::new(0),
        }
    }

    /// Register an event to be returned for a token.
    pub fn register_event(&self, token: &str, event: Event) {
        self.events.write().unwrap().insert(token.to_string(), event);
    }

    /// Register the roster of one subgroup.
    pub fn set_subgroup_riders(&self, subgroup: i64, rider_ids: &[RiderId]) {
        let riders = rider_ids.iter().copied().map(EventRider::new).collect();
        self.subgroup_riders.write().unwrap().insert(subgroup, riders);
    }

    /// Number of `find_matching_event` calls made so far.
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Number of `get_riders` calls made so far.
    pub fn rider_calls(&self) -> usize {
        self.rider_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockEventDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventDirectory for MockEventDirectory {
    async fn find_matching_event(&self, token: &str) -> Result<Option<Event>, SourceError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.events.read().unwrap().get(token).cloned())
    }

    async fn get_riders(&self, subgroup: i64) -> Result<Vec<EventRider>, SourceError> {
        self.rider_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .subgroup_riders
            .read()
            .unwrap()
            .get(&subgroup)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riders_shared::types::EventSubgroup;

    fn test_event(subgroups: &[(i64, &str)]) -> Event {
        Event {
            event_subgroups: subgroups
                .iter()
                .map(|(id, label)| EventSubgroup {
                    id: *id,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_registered_event_is_found() {
        let directory = MockEventDirectory::new();
        directory.register_event("3939", test_event(&[(91, "A"), (92, "B")]));

        let event = directory.find_matching_event("3939").await.unwrap();
        assert_eq!(event.unwrap().event_subgroups.len(), 2);
        assert_eq!(directory.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_token_matches_nothing() {
        let directory = MockEventDirectory::new();
        let event = directory.find_matching_event("no such event").await.unwrap();
        assert!(event.is_none());
    }

    #[tokio::test]
    async fn test_subgroup_roster_round_trip() {
        let directory = MockEventDirectory::new();
        directory.set_subgroup_riders(91, &[40104, 50105]);

        let riders = directory.get_riders(91).await.unwrap();
        assert_eq!(riders.len(), 2);
        assert_eq!(riders[0].id, 40104);
        assert_eq!(directory.rider_calls(), 1);
    }
}
