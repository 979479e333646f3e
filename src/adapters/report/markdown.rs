//! Markdown influence report.
//!
//! Writes `influencers.md`: summary counts, ranked table, then who follows whom.

use crate::domain::{DomainError, NetworkReport};
use crate::ports::ReportSink;
use std::path::PathBuf;
use tokio::fs;

pub const MARKDOWN_FILE: &str = "influencers.md";

/// Writes a human-readable report into `reports_dir`.
pub struct MarkdownReport {
    reports_dir: PathBuf,
}

impl MarkdownReport {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Render the report body.
    pub fn render(report: &NetworkReport) -> String {
        let mut md = String::new();

        // Header
        md.push_str("# Influence Report\n\n");
        md.push_str(&format!(
            "**Generated:** {} | **Posts scanned:** {} | **Users:** {} | **Follows:** {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.posts_scanned,
            report.graph.user_count(),
            report.graph.edge_count()
        ));
        md.push_str("---\n\n");

        // Ranking
        md.push_str("## Top Influencers\n\n");
        if report.influencers.is_empty() {
            md.push_str("_No user has any inferred followers._\n\n");
        } else {
            md.push_str("| Rank | User | Followers |\n");
            md.push_str("|-----:|------|----------:|\n");
            for (idx, inf) in report.influencers.iter().enumerate() {
                md.push_str(&format!(
                    "| {} | @{} | {} |\n",
                    idx + 1,
                    inf.username,
                    inf.followers
                ));
            }
            md.push('\n');
        }

        // Follows
        if !report.graph.is_empty() {
            md.push_str("## Follows\n\n");
            for (user, follows) in report.graph.iter() {
                if follows.is_empty() {
                    md.push_str(&format!("- @{} (follows nobody)\n", user));
                } else {
                    let list: Vec<String> = follows.iter().map(|f| format!("@{}", f)).collect();
                    md.push_str(&format!("- @{} → {}\n", user, list.join(", ")));
                }
            }
            md.push('\n');
        }

        // Footer
        md.push_str("---\n");
        md.push_str("*Generated by mention-graph*\n");
        md
    }
}

#[async_trait::async_trait]
impl ReportSink for MarkdownReport {
    async fn publish(&self, report: &NetworkReport) -> Result<Vec<PathBuf>, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;

        let path = self.reports_dir.join(MARKDOWN_FILE);
        fs::write(&path, Self::render(report))
            .await
            .map_err(|e| DomainError::Report(format!("Failed to write report: {}", e)))?;

        Ok(vec![path])
    }
}
