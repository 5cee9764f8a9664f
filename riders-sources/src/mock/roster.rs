//! Mock live-riding roster source.
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use riders_shared::types::RidingEntry;

use crate::errors::SourceError;
use crate::interfaces::RosterSource;

/// Mock roster source returning a pre-configured list of riding entries.
pub struct MockRosterSource {
    entries: RwLock<Vec<RidingEntry>>,
    calls: AtomicUsize,
    fail_next: AtomicBool,
}

impl MockRosterSource {
    /// Create a new empty mock roster.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Replace the whole roster.
    pub fn set_entries(&self, entries: Vec<RidingEntry>) {
        *self.entries.write().unwrap() = entries;
    }

    /// Append one roster entry.
    pub fn add(&self, player_id: i64, first_name: Option<&str>, last_name: Option<&str>) {
        self.entries
            .write()
            .unwrap()
            .push(RidingEntry::new(player_id, first_name, last_name));
    }

    /// Make the next `get` call fail with a backend error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of `get` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRosterSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterSource for MockRosterSource {
    async fn get(&self) -> Result<Vec<RidingEntry>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(SourceError::Backend("injected roster failure".to_string()));
        }
        Ok(self.entries.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roster_round_trip() {
        let roster = MockRosterSource::new();
        roster.add(10101, Some("Fred"), Some("Bloggs"));
        roster.add(20102, None, Some("Smoo"));

        let entries = roster.get().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player_id, 10101);
        assert_eq!(entries[1].first_name, None);
        assert_eq!(roster.calls(), 1);
    }

    #[tokio::test]
    async fn test_fail_next_fails_once() {
        let roster = MockRosterSource::new();
        roster.fail_next();

        assert!(matches!(
            roster.get().await,
            Err(SourceError::Backend(_))
        ));
        assert!(roster.get().await.is_ok());
    }
}
