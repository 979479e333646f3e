//! Influence ranking by inferred follower count.
//!
//! Only keys of the graph are ranked, and only those with at least one follower.
//! Ties on follower count are ordered by username, ascending, so output is reproducible.

use crate::domain::{FollowsGraph, Influencer, Username};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// Follower count for every key of `graph` (0 when nobody follows them).
///
/// Followees that are not keys are left out.
pub fn follower_counts(graph: &FollowsGraph) -> BTreeMap<Username, usize> {
    let mut counts: BTreeMap<Username, usize> =
        graph.users().map(|user| (user.clone(), 0)).collect();
    for (_, followee) in graph.edges() {
        if let Some(count) = counts.get_mut(followee) {
            *count += 1;
        }
    }
    counts
}

/// Users with at least one follower, most-followed first, with their counts.
pub fn rank_influencers(graph: &FollowsGraph) -> Vec<Influencer> {
    let mut ranked: Vec<Influencer> = follower_counts(graph)
        .into_iter()
        .filter(|&(_, followers)| followers > 0)
        .map(|(username, followers)| Influencer {
            username,
            followers,
        })
        .collect();
    // Counts descending, then username ascending.
    ranked.sort_by(|a, b| {
        Reverse(a.followers)
            .cmp(&Reverse(b.followers))
            .then_with(|| a.username.cmp(&b.username))
    });

    debug!(
        users = graph.user_count(),
        influencers = ranked.len(),
        "influence ranking computed"
    );
    ranked
}

/// Usernames from [`rank_influencers`], without counts.
pub fn rank_by_influence(graph: &FollowsGraph) -> Vec<Username> {
    rank_influencers(graph)
        .into_iter()
        .map(|influencer| influencer.username)
        .collect()
}
