//! Implements PostSource over a JSON Lines file (one post object per line).
//!
//! Blank lines are skipped. A line that is not a valid post fails the whole load,
//! with its 1-based line number in the error.

use crate::domain::{DomainError, Post};
use crate::ports::PostSource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// JSONL post corpus, e.g. `{"author":"alice","text":"hi @bob","in_reply_to":"bob"}` per line.
pub struct JsonlPostSource {
    path: PathBuf,
}

impl JsonlPostSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn parse(&self, content: &str) -> Result<Vec<Post>, DomainError> {
        let mut posts = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let post: Post = serde_json::from_str(trimmed).map_err(|e| {
                DomainError::Source(format!("{}:{}: {}", self.path.display(), idx + 1, e))
            })?;
            post.validate()?;
            posts.push(post);
        }
        Ok(posts)
    }
}

#[async_trait::async_trait]
impl PostSource for JsonlPostSource {
    async fn load_posts(&self) -> Result<Vec<Post>, DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Source(format!(
                    "post file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(DomainError::Source(e.to_string())),
        };
        let posts = self.parse(&content)?;
        debug!(path = %self.path.display(), count = posts.len(), "read posts (JSONL)");
        Ok(posts)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[tokio::test]
    async fn test_reads_posts_and_skips_blank_lines() {
        let f = write_temp(concat!(
            r#"{"id":"1","author":"alice","text":"hello @Bob!"}"#,
            "\n\n",
            r#"{"author":"bob","timestamp":"2016-02-17T10:00:00Z"}"#,
            "\n",
            r#"{"author":"carol","text":"+1","in_reply_to":"alice"}"#,
            "\n",
        ));
        let posts = JsonlPostSource::new(f.path()).load_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id.as_deref(), Some("1"));
        assert_eq!(posts[1].text, "");
        assert!(posts[1].timestamp.is_some());
        assert_eq!(posts[2].in_reply_to.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_malformed_line_reports_line_number() {
        let f = write_temp("{\"author\":\"alice\",\"text\":\"ok\"}\nnot json\n");
        let err = JsonlPostSource::new(f.path()).load_posts().await.unwrap_err();
        match err {
            DomainError::Source(msg) => assert!(msg.contains(":2:"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_author_is_rejected() {
        let f = write_temp("{\"author\":\"\",\"text\":\"@bob\"}\n");
        let err = JsonlPostSource::new(f.path()).load_posts().await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonlPostSource::new(dir.path().join("absent.jsonl"));
        assert!(matches!(
            source.load_posts().await,
            Err(DomainError::Source(_))
        ));
    }
}
