//! Application use cases. Pure inference and ranking, plus orchestration via ports.

pub mod graph_builder;
pub mod influence_ranker;
pub mod network_service;

pub use graph_builder::{GraphBuilder, infer_follows_graph};
pub use influence_ranker::{follower_counts, rank_by_influence, rank_influencers};
pub use network_service::NetworkService;
