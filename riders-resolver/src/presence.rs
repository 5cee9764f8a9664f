//! Process-wide registry of riders that have recently requested resolution.
//!
//! Every resolution touches the registry, whatever the filter mode; the
//! "all users" mode reads it back. The registry is constructor-injected and
//! shared between rider sessions via `Arc` rather than living in a global.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use riders_shared::types::RiderId;
use tokio::time::{Duration, Instant};

/// How long a rider stays "active" after its last resolution. Open
/// parameter: nothing observable pins this value.
pub const DEFAULT_PRESENCE_WINDOW: Duration = Duration::from_secs(600);

struct PresenceRecord {
    seq: u64,
    last_active: Instant,
}

struct State {
    next_seq: u64,
    records: HashMap<RiderId, PresenceRecord>,
}

/// Tracks which riders have recently called the resolution engine.
pub struct PresenceRegistry {
    window: Duration,
    state: RwLock<State>,
}

impl PresenceRegistry {
    /// Create a registry with the given presence window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: RwLock::new(State {
                next_seq: 0,
                records: HashMap::new(),
            }),
        }
    }

    /// Create a registry with [`DEFAULT_PRESENCE_WINDOW`].
    pub fn with_default_window() -> Self {
        Self::new(DEFAULT_PRESENCE_WINDOW)
    }

    /// Upsert the presence record of a rider with the current time.
    ///
    /// A rider keeps its original first-touch position; only the activity
    /// timestamp moves.
    pub fn touch(&self, rider: RiderId) {
        let now = Instant::now();
        let state = &mut *self.state.write().unwrap();
        match state.records.entry(rider) {
            Entry::Occupied(mut occupied) => occupied.get_mut().last_active = now,
            Entry::Vacant(vacant) => {
                vacant.insert(PresenceRecord {
                    seq: state.next_seq,
                    last_active: now,
                });
                state.next_seq += 1;
            }
        }
    }

    /// Ids of all riders touched within the presence window, in first-touch
    /// order, optionally excluding one rider.
    pub fn active(&self, excluding: Option<RiderId>) -> Vec<RiderId> {
        let now = Instant::now();
        let state = self.state.read().unwrap();
        let mut live: Vec<(u64, RiderId)> = state
            .records
            .iter()
            .filter(|(id, record)| {
                Some(**id) != excluding && now.duration_since(record.last_active) <= self.window
            })
            .map(|(id, record)| (record.seq, *id))
            .collect();
        live.sort_unstable();
        live.into_iter().map(|(_, id)| id).collect()
    }

    /// Drop every presence record. Used for test and session-boundary
    /// isolation.
    pub fn reset(&self) {
        let state = &mut *self.state.write().unwrap();
        state.records.clear();
        state.next_seq = 0;
    }
}
