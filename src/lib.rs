//! mention-graph: infer who follows whom from @-mentions and rank users by follower count.
//!
//! Hexagonal layout: pure domain and use cases in the middle, file-backed adapters outside.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

pub use domain::{FollowsGraph, Influencer, Post, Username};
pub use usecases::{infer_follows_graph, rank_by_influence};
