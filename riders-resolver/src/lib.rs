//! # Riders Resolver
//! This crate implements the rider visibility engine: given one viewing
//! rider and a mutable filter mode, it resolves the set of other riders and
//! ghosts to show on that rider's map and fetches each one's live position.
//!
//! The expensive part (which ids are visible) is memoized per rider in a TTL
//! cache; the volatile part (where those ids currently are) is re-fetched on
//! every call. A process-wide presence registry of recent callers backs the
//! "all users" mode.
pub mod aggregator;
pub mod cache;
pub mod errors;
pub mod filter;
pub mod presence;
pub mod resolver;
pub mod rider;

pub use cache::IdSetCache;
pub use errors::ResolverError;
pub use filter::Filter;
pub use presence::PresenceRegistry;
pub use rider::{Rider, Sources};
