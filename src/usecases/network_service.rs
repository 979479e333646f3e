//! Network analysis service. Orchestrates source -> graph -> ranking -> report.
//!
//! Inference and ranking are pure; this service only moves data between ports.

use crate::domain::{DomainError, NetworkReport};
use crate::ports::{InputPort, PostSource, ReportSink};
use crate::usecases::graph_builder::GraphBuilder;
use crate::usecases::influence_ranker::rank_influencers;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for follows-graph inference and influence ranking.
///
/// Orchestrates the flow:
/// 1. Load posts from the source
/// 2. Infer the follows graph
/// 3. Rank influencers (optionally keep only the top N)
/// 4. Publish the report through the sink
pub struct NetworkService {
    source: Arc<dyn PostSource>,
    sink: Arc<dyn ReportSink>,
    builder: GraphBuilder,
    top_n: Option<usize>,
}

impl NetworkService {
    /// Create a new network service.
    ///
    /// # Arguments
    /// * `source` - Post source implementation (JSONL, CSV, memory)
    /// * `sink` - Report sink implementation (Markdown, JSON, composite)
    /// * `builder` - Graph inference settings
    /// * `top_n` - Keep only this many influencers in the report; `None` keeps all
    pub fn new(
        source: Arc<dyn PostSource>,
        sink: Arc<dyn ReportSink>,
        builder: GraphBuilder,
        top_n: Option<usize>,
    ) -> Self {
        Self {
            source,
            sink,
            builder,
            top_n,
        }
    }

    /// Run one analysis and publish it.
    pub async fn analyze(&self) -> Result<NetworkReport, DomainError> {
        let posts = self.source.load_posts().await?;
        info!(
            source = %self.source.describe(),
            posts = posts.len(),
            "posts loaded"
        );
        if posts.is_empty() {
            warn!(source = %self.source.describe(), "post source is empty");
        }

        let graph = self.builder.build(&posts);
        let mut influencers = rank_influencers(&graph);
        if let Some(n) = self.top_n {
            influencers.truncate(n);
        }

        info!(
            users = graph.user_count(),
            edges = graph.edge_count(),
            influencers = influencers.len(),
            reply_evidence = self.builder.reply_evidence(),
            "follows graph inferred"
        );

        let report = NetworkReport {
            graph,
            influencers,
            posts_scanned: posts.len(),
            generated_at: Utc::now(),
        };

        let written = self.sink.publish(&report).await?;
        for path in &written {
            info!(path = %path.display(), "report written");
        }

        Ok(report)
    }
}

#[async_trait::async_trait]
impl InputPort for NetworkService {
    async fn run(&self) -> Result<NetworkReport, DomainError> {
        self.analyze().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::source::MemoryPostSource;
    use crate::domain::{Post, Username};
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Keeps every published report in memory.
    #[derive(Default)]
    struct RecordingSink {
        reports: Mutex<Vec<NetworkReport>>,
    }

    #[async_trait::async_trait]
    impl ReportSink for RecordingSink {
        async fn publish(&self, report: &NetworkReport) -> Result<Vec<PathBuf>, DomainError> {
            self.reports.lock().unwrap().push(report.clone());
            Ok(Vec::new())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl PostSource for FailingSource {
        async fn load_posts(&self) -> Result<Vec<Post>, DomainError> {
            Err(DomainError::Source("boom".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn corpus() -> Vec<Post> {
        vec![
            Post::new("alice", "@carol great thread"),
            Post::new("bob", "@carol @alice"),
            Post::new("dave", "thanks!").replying_to("bob"),
        ]
    }

    #[tokio::test]
    async fn test_analyze_publishes_report() {
        let sink = Arc::new(RecordingSink::default());
        let service = NetworkService::new(
            Arc::new(MemoryPostSource::new(corpus())),
            sink.clone(),
            GraphBuilder::new(),
            None,
        );

        let report = service.run().await.unwrap();
        assert_eq!(report.posts_scanned, 3);
        assert_eq!(report.influencers[0].username, Username::new("carol"));
        assert_eq!(report.influencers[0].followers, 2);
        // Mentions only: dave's reply is not evidence.
        assert!(!report.graph.contains_user(&Username::new("dave")));

        let published = sink.reports.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].graph, report.graph);
    }

    #[tokio::test]
    async fn test_reply_evidence_and_top_n() {
        let sink = Arc::new(RecordingSink::default());
        let service = NetworkService::new(
            Arc::new(MemoryPostSource::new(corpus())),
            sink,
            GraphBuilder::new().with_reply_evidence(true),
            Some(2),
        );

        let report = service.analyze().await.unwrap();
        assert!(report
            .graph
            .follows(&Username::new("dave"), &Username::new("bob")));
        assert_eq!(report.influencers.len(), 2);
        assert_eq!(report.influencers[0].username, Username::new("carol"));
    }

    #[tokio::test]
    async fn test_empty_source_yields_empty_report() {
        let service = NetworkService::new(
            Arc::new(MemoryPostSource::new(Vec::new())),
            Arc::new(RecordingSink::default()),
            GraphBuilder::new(),
            None,
        );
        let report = service.analyze().await.unwrap();
        assert!(report.graph.is_empty());
        assert!(report.influencers.is_empty());
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let sink = Arc::new(RecordingSink::default());
        let service =
            NetworkService::new(Arc::new(FailingSource), sink.clone(), GraphBuilder::new(), None);
        let err = service.analyze().await.unwrap_err();
        assert!(matches!(err, DomainError::Source(_)));
        assert!(sink.reports.lock().unwrap().is_empty());
    }
}
