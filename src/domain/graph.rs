//! Follows graph: username -> set of usernames that user follows.
//!
//! Keys and members are [`Username`]s, so case variants collapse on insertion.
//! A missing key means the same as an empty set.

use crate::domain::Username;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FollowsGraph {
    follows: BTreeMap<Username, BTreeSet<Username>>,
}

impl FollowsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `user` a node, mapping to an empty set if it was not one yet.
    pub fn ensure_user(&mut self, user: Username) {
        self.follows.entry(user).or_default();
    }

    /// Record that `follower` follows `followee`. Self-follows are ignored.
    ///
    /// Only `follower` becomes a key; `followee` is not added as a node.
    /// Returns `true` if the edge was new.
    pub fn add_follow(&mut self, follower: Username, followee: Username) -> bool {
        if follower == followee {
            return false;
        }
        self.follows.entry(follower).or_default().insert(followee)
    }

    pub fn contains_user(&self, user: &Username) -> bool {
        self.follows.contains_key(user)
    }

    pub fn follows(&self, follower: &Username, followee: &Username) -> bool {
        self.follows
            .get(follower)
            .is_some_and(|set| set.contains(followee))
    }

    /// Users that `user` follows. Empty for unknown users.
    pub fn follows_of<'a>(
        &'a self,
        user: &Username,
    ) -> impl Iterator<Item = &'a Username> + use<'a> {
        self.follows.get(user).into_iter().flatten()
    }

    /// All keys, in ascending order.
    pub fn users(&self) -> impl Iterator<Item = &Username> {
        self.follows.keys()
    }

    /// Every `(follower, followee)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&Username, &Username)> {
        self.follows
            .iter()
            .flat_map(|(u, set)| set.iter().map(move |v| (u, v)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Username, &BTreeSet<Username>)> {
        self.follows.iter()
    }

    pub fn user_count(&self) -> usize {
        self.follows.len()
    }

    pub fn edge_count(&self) -> usize {
        self.follows.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.follows.is_empty()
    }
}

/// Build a graph from `(follower, followees)` entries. Every follower becomes a key;
/// self-follows are dropped.
impl<U, I> FromIterator<(U, I)> for FollowsGraph
where
    U: Into<Username>,
    I: IntoIterator,
    I::Item: Into<Username>,
{
    fn from_iter<T: IntoIterator<Item = (U, I)>>(iter: T) -> Self {
        let mut graph = FollowsGraph::new();
        for (follower, followees) in iter {
            let follower = follower.into();
            graph.ensure_user(follower.clone());
            for followee in followees {
                graph.add_follow(follower.clone(), followee.into());
            }
        }
        graph
    }
}

/// Deserialized names are re-canonicalized, so `{"A": ["a"], "a": ["B"]}` reads as `{a: {b}}`.
impl<'de> Deserialize<'de> for FollowsGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(name: &str) -> Username {
        Username::new(name)
    }

    #[test]
    fn test_self_follow_is_ignored() {
        let mut g = FollowsGraph::new();
        assert!(!g.add_follow(u("Bob"), u("bob")));
        assert!(g.is_empty());
    }

    #[test]
    fn test_case_variants_collapse() {
        let mut g = FollowsGraph::new();
        assert!(g.add_follow(u("Alice"), u("BOB")));
        assert!(!g.add_follow(u("alice"), u("bob")));
        g.ensure_user(u("ALICE"));
        assert_eq!(g.user_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.follows(&u("aLiCe"), &u("Bob")));
    }

    #[test]
    fn test_missing_key_reads_as_empty() {
        let g: FollowsGraph = [("a", vec!["b"])].into_iter().collect();
        assert!(!g.contains_user(&u("b")));
        assert_eq!(g.follows_of(&u("b")).count(), 0);
        assert_eq!(g.follows_of(&u("a")).count(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let g: FollowsGraph = [("a", vec!["c", "b"]), ("b", vec![])].into_iter().collect();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"a":["b","c"],"b":[]}"#);
    }

    #[test]
    fn test_deserialize_recanonicalizes() {
        let g: FollowsGraph = serde_json::from_str(r#"{"A":["a"],"a":["B"]}"#).unwrap();
        assert_eq!(g.user_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.follows(&u("a"), &u("b")));
    }
}
