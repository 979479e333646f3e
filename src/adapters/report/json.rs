//! JSON report files: the follows graph and the ranked influencers.
//!
//! Each file is written atomically (temp file, sync, rename) so readers never see a
//! half-written report.

use crate::domain::{DomainError, NetworkReport};
use crate::ports::ReportSink;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub const GRAPH_FILE: &str = "follows_graph.json";
pub const INFLUENCERS_FILE: &str = "influencers.json";

/// Writes `follows_graph.json` and `influencers.json` into `reports_dir`.
pub struct JsonReport {
    reports_dir: PathBuf,
}

impl JsonReport {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Atomic save using write-replace:
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Rename over the target path
    async fn write_atomic<T: Serialize + ?Sized>(
        path: &Path,
        value: &T,
    ) -> Result<(), DomainError> {
        let json =
            serde_json::to_string_pretty(value).map_err(|e| DomainError::Report(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Report(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Report(format!("write temp file: {}", e)))?;
        f.write_all(b"\n")
            .await
            .map_err(|e| DomainError::Report(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Report(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, path)
            .await
            .map_err(|e| DomainError::Report(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReportSink for JsonReport {
    async fn publish(&self, report: &NetworkReport) -> Result<Vec<PathBuf>, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;

        let graph_path = self.reports_dir.join(GRAPH_FILE);
        Self::write_atomic(&graph_path, &report.graph).await?;

        let influencers_path = self.reports_dir.join(INFLUENCERS_FILE);
        Self::write_atomic(&influencers_path, &report.influencers).await?;

        Ok(vec![graph_path, influencers_path])
    }
}
