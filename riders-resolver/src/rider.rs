//! The per-session `Rider` entry point.
//!
//! A `Rider` is created once per viewing session and wires the filter, the
//! shared id-set cache and presence registry, the visibility resolver, and
//! the position aggregator together.
use std::sync::Arc;

use riders_shared::types::{Position, RiderId};
use riders_sources::{
    EventDirectory, GhostSource, NameTracker, PositionLookup, ProfileStore, RosterSource,
};
use tracing::debug;

use crate::aggregator;
use crate::cache::IdSetCache;
use crate::errors::ResolverError;
use crate::filter::Filter;
use crate::presence::PresenceRegistry;
use crate::resolver;

/// The collaborator set a resolution reads from.
///
/// The engine depends only on these interfaces, never on concrete
/// implementations; tests swap in the in-memory mocks from `riders-sources`.
#[derive(Clone)]
pub struct Sources {
    pub profiles: Arc<dyn ProfileStore>,
    pub roster: Arc<dyn RosterSource>,
    pub events: Arc<dyn EventDirectory>,
    pub tracker: Arc<dyn NameTracker>,
    pub ghosts: Arc<dyn GhostSource>,
}

impl Sources {
    /// Bundle the five collaborator handles.
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        roster: Arc<dyn RosterSource>,
        events: Arc<dyn EventDirectory>,
        tracker: Arc<dyn NameTracker>,
        ghosts: Arc<dyn GhostSource>,
    ) -> Self {
        Self {
            profiles,
            roster,
            events,
            tracker,
            ghosts,
        }
    }
}

/// One viewing session's subject entity.
///
/// Holds the current [`Filter`] (default: none, mutated only via
/// [`Rider::set_filter`]), the injected live-position lookup, and handles to
/// the shared cache and presence registry.
pub struct Rider {
    id: RiderId,
    account: Option<String>,
    filter: Filter,
    lookup: Arc<dyn PositionLookup>,
    sources: Sources,
    presence: Arc<PresenceRegistry>,
    cache: Arc<IdSetCache>,
}

impl Rider {
    /// Create a rider session with the default (follow-based) filter.
    pub fn new(
        id: RiderId,
        lookup: Arc<dyn PositionLookup>,
        sources: Sources,
        presence: Arc<PresenceRegistry>,
        cache: Arc<IdSetCache>,
    ) -> Self {
        Self {
            id,
            account: None,
            filter: Filter::default(),
            lookup,
            sources,
            presence,
            cache,
        }
    }

    /// Attach an opaque account reference. The engine never examines it.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Parse `raw` and replace the current filter.
    pub fn set_filter(&mut self, raw: &str) {
        self.filter = Filter::parse(raw);
        debug!(rider = self.id, filter = ?self.filter, "filter replaced");
    }

    /// Resolve the riders and ghosts currently visible on this rider's map
    /// and fetch each one's live position.
    ///
    /// The id set comes from the cache when fresh; positions are re-fetched
    /// on every call. Each call also marks this rider present for the
    /// "all users" mode.
    pub async fn positions(&self) -> Result<Vec<Position>, ResolverError> {
        let signature = self.filter.signature();
        let ids = self
            .cache
            .resolve(self.id, &signature, || {
                resolver::resolve_visible_ids(self.id, &self.filter, &self.sources, &self.presence)
            })
            .await?;
        self.presence.touch(self.id);
        debug!(rider = self.id, visible = ids.len(), "resolved map contents");

        aggregator::collect_positions(&ids, self.lookup.as_ref(), self.sources.ghosts.as_ref())
            .await
    }
}
