//! Position aggregation: concurrent per-id lookups whose results stay in
//! resolution order, with ghost records appended unconditionally.
use futures::future::try_join_all;
use riders_shared::types::{Position, RiderId};
use riders_sources::{GhostSource, PositionLookup};

use crate::errors::ResolverError;

/// Fetch the live position of every resolved id and append the current
/// ghost records.
///
/// Lookups are issued concurrently but results are positionally matched to
/// the input order; completion order never leaks into the output. A single
/// failing lookup fails the whole aggregation. Ghost records come last, for
/// every filter mode, and are never deduplicated or reordered.
pub async fn collect_positions(
    ids: &[RiderId],
    lookup: &dyn PositionLookup,
    ghosts: &dyn GhostSource,
) -> Result<Vec<Position>, ResolverError> {
    let mut positions = try_join_all(ids.iter().map(|id| lookup.position_of(*id))).await?;
    positions.extend(ghosts.get_positions());
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use riders_sources::{MockGhostSource, MockPositionLookup, SourceError};
    use tokio::time::Duration;

    use super::*;

    /// Lookup whose futures complete in reverse id order.
    struct ReversedCompletionLookup;

    #[async_trait]
    impl PositionLookup for ReversedCompletionLookup {
        async fn position_of(&self, rider: RiderId) -> Result<Position, SourceError> {
            tokio::time::sleep(Duration::from_millis(1000 - rider as u64)).await;
            Ok(Position::new(rider, rider as f64, 0.0))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_output_order_is_input_order_not_completion_order() {
        let ghosts = MockGhostSource::new();
        let positions = collect_positions(&[1, 2, 3], &ReversedCompletionLookup, &ghosts)
            .await
            .unwrap();

        let ids: Vec<_> = positions.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_ghosts_are_appended_after_resolved_ids() {
        let lookup = MockPositionLookup::new();
        let ghosts = MockGhostSource::new();
        ghosts.set_positions(vec![Position::new(-7, 5.0, 6.0)]);

        let positions = collect_positions(&[10101, 20102], &lookup, &ghosts)
            .await
            .unwrap();

        let ids: Vec<_> = positions.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10101, 20102, -7]);
        assert_eq!(positions[2].x, 5.0);
    }

    #[tokio::test]
    async fn test_ghosts_are_not_deduplicated_against_resolved_ids() {
        let lookup = MockPositionLookup::new();
        let ghosts = MockGhostSource::new();
        ghosts.set_positions(vec![Position::new(10101, 9.0, 9.0)]);

        let positions = collect_positions(&[10101], &lookup, &ghosts).await.unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].id, 10101);
        assert_eq!(positions[1].id, 10101);
    }

    #[tokio::test]
    async fn test_empty_id_list_still_carries_ghosts() {
        let lookup = MockPositionLookup::new();
        let ghosts = MockGhostSource::new();
        ghosts.set_positions(vec![Position::new(-1, 0.0, 0.0)]);

        let positions = collect_positions(&[], &lookup, &ghosts).await.unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_one_failing_lookup_fails_the_whole_aggregation() {
        let lookup = MockPositionLookup::new();
        lookup.fail_for(20102);
        let ghosts = MockGhostSource::new();

        let result = collect_positions(&[10101, 20102, 30103], &lookup, &ghosts).await;
        assert!(result.is_err());
    }
}
