//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the follows graph and the mention tokenizer live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod graph;
pub mod mention;

pub use entities::{Influencer, NetworkReport, Post, Username};
pub use errors::DomainError;
pub use graph::FollowsGraph;
