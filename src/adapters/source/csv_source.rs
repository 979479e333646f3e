//! Implements PostSource over a CSV export. Uses the `csv` crate with serde rows.
//!
//! Required column: `author`. Optional: `text` (missing reads as empty), `id`,
//! `timestamp` (RFC 3339), `in_reply_to`.
//! Column order does not matter; empty optional cells read as absent.

use crate::domain::{DomainError, Post};
use crate::ports::PostSource;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// One CSV record as exported. Mapped to [`Post`] after validation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    author: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    in_reply_to: Option<String>,
}

/// Trimmed cell; empty or whitespace-only cells count as missing.
fn non_empty(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn row_to_post(row: CsvRow, record: usize) -> Result<Post, String> {
    let timestamp = match non_empty(row.timestamp) {
        Some(raw) => Some(
            DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| format!("record {}: bad timestamp {:?}: {}", record, raw, e))?,
        ),
        None => None,
    };
    Ok(Post {
        id: non_empty(row.id),
        author: row.author,
        text: row.text.unwrap_or_default(),
        timestamp,
        in_reply_to: non_empty(row.in_reply_to),
    })
}

/// CSV post corpus with a header row.
pub struct CsvPostSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvPostSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<Post>, DomainError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(bytes);

        let mut posts = Vec::new();
        for (idx, result) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = result.map_err(|e| {
                DomainError::Source(format!("{}: {}", self.path.display(), e))
            })?;
            let post = row_to_post(row, idx + 1).map_err(|e| {
                DomainError::Source(format!("{}: {}", self.path.display(), e))
            })?;
            post.validate()?;
            posts.push(post);
        }
        Ok(posts)
    }
}

#[async_trait::async_trait]
impl PostSource for CsvPostSource {
    async fn load_posts(&self) -> Result<Vec<Post>, DomainError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            DomainError::Source(format!("read {}: {}", self.path.display(), e))
        })?;
        let posts = self.parse(&bytes)?;
        debug!(path = %self.path.display(), count = posts.len(), "read posts (CSV)");
        Ok(posts)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
