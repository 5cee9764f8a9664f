//! This module defines the `ProfileStore` trait, which provides an interface
//! for fetching a rider's own profile and their followee list.
use riders_shared::types::{Followee, Profile, RiderId};

use crate::errors::SourceError;

/// A trait that defines the interface for the profile store collaborator.
///
/// Implementors provide access to rider profiles and to the social graph
/// used by the default (follow-based) visibility mode.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetches the profile of the given rider.
    ///
    /// # Arguments
    ///
    /// * `rider` - The id of the rider whose profile to fetch.
    ///
    /// # Returns
    ///
    /// The rider's `Profile`, or a `SourceError` if the fetch fails.
    async fn get_profile(&self, rider: RiderId) -> Result<Profile, SourceError>;

    /// Fetches the list of riders the given rider follows.
    async fn get_followees(&self, rider: RiderId) -> Result<Vec<Followee>, SourceError>;
}
