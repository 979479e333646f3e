//! In-memory post source for tests and for embedding the pipeline in other programs.

use crate::domain::{DomainError, Post};
use crate::ports::PostSource;

/// Serves a fixed list of posts.
pub struct MemoryPostSource {
    posts: Vec<Post>,
}

impl MemoryPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait::async_trait]
impl PostSource for MemoryPostSource {
    async fn load_posts(&self) -> Result<Vec<Post>, DomainError> {
        for post in &self.posts {
            post.validate()?;
        }
        Ok(self.posts.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} posts)", self.posts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemoryPostSource::new(vec![Post::new("alice", "@bob")]);
        let posts = source.load_posts().await.unwrap();
        assert_eq!(posts, vec![Post::new("alice", "@bob")]);
    }

    #[tokio::test]
    async fn test_memory_source_rejects_blank_author() {
        let source = MemoryPostSource::new(vec![Post::new("", "@bob")]);
        assert!(matches!(
            source.load_posts().await,
            Err(DomainError::InvalidInput(_))
        ));
    }
}
