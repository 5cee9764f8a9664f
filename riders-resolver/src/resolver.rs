//! Visibility resolution: the per-filter algorithms that produce the
//! deduplicated, ordered id list for one rider.
//!
//! All ordering is expressed through pure functions over owned vectors;
//! collaborator responses are never mutated in place. Ids are deduplicated
//! by first occurrence, and the only reordering ever applied is moving the
//! viewing rider to the front.
use std::collections::HashSet;

use futures::future::try_join_all;
use riders_shared::types::{Event, RiderId, RidingEntry};
use tracing::debug;

use crate::errors::ResolverError;
use crate::filter::Filter;
use crate::presence::PresenceRegistry;
use crate::rider::Sources;

/// Resolve the ordered id list visible to `me` under `filter`.
pub async fn resolve_visible_ids(
    me: RiderId,
    filter: &Filter,
    sources: &Sources,
    presence: &PresenceRegistry,
) -> Result<Vec<RiderId>, ResolverError> {
    match filter {
        Filter::None => resolve_followed(me, sources).await,
        Filter::NameSubstring(text) => resolve_by_name(me, text, sources).await,
        Filter::EventCode(code) => resolve_event_code(me, *code, sources).await,
        Filter::EventName(name) => resolve_event_name(me, name, sources).await,
        Filter::AllUsers => Ok(resolve_all_users(me, presence)),
    }
}

/// Default mode: followees (and the rider itself) who are currently riding,
/// in roster order.
///
/// The rider is not force-included: a rider who is not riding does not
/// appear on their own map.
async fn resolve_followed(me: RiderId, sources: &Sources) -> Result<Vec<RiderId>, ResolverError> {
    let (followees, roster) =
        tokio::try_join!(sources.profiles.get_followees(me), sources.roster.get())?;

    let mut visible: HashSet<RiderId> = followees
        .iter()
        .map(|followee| followee.followee_profile.id)
        .collect();
    visible.insert(me);

    let ids = dedup_ids(
        roster
            .iter()
            .map(|entry| entry.player_id)
            .filter(|id| visible.contains(id)),
    );
    Ok(promote_if_present(me, ids))
}

/// Name mode: roster entries whose name contains `text`, with the rider
/// force-included at the front whether or not they match.
async fn resolve_by_name(
    me: RiderId,
    text: &str,
    sources: &Sources,
) -> Result<Vec<RiderId>, ResolverError> {
    let roster = sources.roster.get().await?;
    let needle = text.to_lowercase();

    let matched = dedup_ids(
        roster
            .iter()
            .filter(|entry| entry_matches(entry, &needle))
            .map(|entry| entry.player_id),
    );
    Ok(promote_or_prepend(me, matched))
}

/// Event-code mode: subgroup rosters of the matching official event, or
/// `[me]` alone when the code matches nothing. Never consults the
/// riding-in-event name tracker.
async fn resolve_event_code(
    me: RiderId,
    code: i64,
    sources: &Sources,
) -> Result<Vec<RiderId>, ResolverError> {
    match sources.events.find_matching_event(&code.to_string()).await? {
        Some(event) => resolve_official(me, &event, sources).await,
        None => {
            debug!(me, code, "no event matches code");
            Ok(vec![me])
        }
    }
}

/// Event-name mode: always registers the rider under `name`, then resolves
/// against the official event when one matches and against the unofficial
/// riding-in-event roster otherwise.
async fn resolve_event_name(
    me: RiderId,
    name: &str,
    sources: &Sources,
) -> Result<Vec<RiderId>, ResolverError> {
    sources.tracker.set_riding_in_event(name, me).await;

    match sources.events.find_matching_event(name).await? {
        Some(event) => resolve_official(me, &event, sources).await,
        None => {
            debug!(me, name, "no official event, using unofficial roster");
            let unofficial = sources.tracker.get_riders_in_event(name).await?;
            let ids = dedup_ids(unofficial.into_iter().map(|rider| rider.id));
            Ok(promote_or_prepend(me, ids))
        }
    }
}

/// Shared official-event algorithm for both event modes.
///
/// Subgroup rosters are fetched concurrently. The subgroup containing the
/// rider, if any, is emitted first with the rider moved to its front; the
/// remaining subgroups follow in directory-declared order, each deduplicated
/// against ids already emitted. A rider in no subgroup is prepended.
async fn resolve_official(
    me: RiderId,
    event: &Event,
    sources: &Sources,
) -> Result<Vec<RiderId>, ResolverError> {
    let rosters: Vec<Vec<RiderId>> = try_join_all(
        event
            .event_subgroups
            .iter()
            .map(|subgroup| sources.events.get_riders(subgroup.id)),
    )
    .await?
    .into_iter()
    .map(|roster| roster.into_iter().map(|rider| rider.id).collect())
    .collect();

    let own_subgroup = rosters.iter().position(|roster| roster.contains(&me));

    let mut out = Vec::new();
    let mut seen = HashSet::new();
    push_unique(&mut out, &mut seen, me);
    if let Some(index) = own_subgroup {
        for id in &rosters[index] {
            push_unique(&mut out, &mut seen, *id);
        }
    }
    for (index, roster) in rosters.iter().enumerate() {
        if Some(index) == own_subgroup {
            continue;
        }
        for id in roster {
            push_unique(&mut out, &mut seen, *id);
        }
    }
    Ok(out)
}

/// All-users mode: the rider first, then every recently active rider in
/// first-touch order. No profile or roster collaborator is consulted.
fn resolve_all_users(me: RiderId, presence: &PresenceRegistry) -> Vec<RiderId> {
    promote_or_prepend(me, presence.active(Some(me)))
}

fn entry_matches(entry: &RidingEntry, needle: &str) -> bool {
    let first = entry.first_name.as_deref().unwrap_or("");
    let last = entry.last_name.as_deref().unwrap_or("");
    // Matching runs over the concatenated "first last" string, so a needle
    // may span the space between the fields.
    format!("{first} {last}").trim().to_lowercase().contains(needle)
}

fn dedup_ids(ids: impl IntoIterator<Item = RiderId>) -> Vec<RiderId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn push_unique(out: &mut Vec<RiderId>, seen: &mut HashSet<RiderId>, id: RiderId) {
    if seen.insert(id) {
        out.push(id);
    }
}

/// `me` first, then `ids` in order with any occurrence of `me` removed.
fn promote_or_prepend(me: RiderId, ids: Vec<RiderId>) -> Vec<RiderId> {
    let mut out = Vec::with_capacity(ids.len() + 1);
    out.push(me);
    out.extend(ids.into_iter().filter(|id| *id != me));
    out
}

/// Like [`promote_or_prepend`], but only when `me` is already present.
fn promote_if_present(me: RiderId, ids: Vec<RiderId>) -> Vec<RiderId> {
    if ids.contains(&me) {
        promote_or_prepend(me, ids)
    } else {
        ids
    }
}
