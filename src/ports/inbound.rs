//! Inbound port. The binary calls into the application.

use crate::domain::{DomainError, NetworkReport};

/// Input port: entry point that runs one full analysis.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Load posts, infer the graph, rank, publish. Returns what was published.
    async fn run(&self) -> Result<NetworkReport, DomainError>;
}
