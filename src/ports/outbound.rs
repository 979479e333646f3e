//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, NetworkReport, Post};
use std::path::PathBuf;

/// Where posts come from (a JSONL dump, a CSV export, memory).
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    /// Load the whole corpus. Order is preserved but carries no meaning for inference.
    async fn load_posts(&self) -> Result<Vec<Post>, DomainError>;

    /// Short human-readable description for logs (e.g. the file path).
    fn describe(&self) -> String;
}

/// Where a finished report goes.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    /// Publish the report. Returns the files written, if any.
    async fn publish(&self, report: &NetworkReport) -> Result<Vec<PathBuf>, DomainError>;
}
