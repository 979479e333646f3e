//! Fan a report out to several sinks, in order.

use crate::domain::{DomainError, NetworkReport};
use crate::ports::ReportSink;
use std::path::PathBuf;
use std::sync::Arc;

pub struct CompositeSink {
    sinks: Vec<Arc<dyn ReportSink>>,
}

impl CompositeSink {
    pub fn new(sinks: Vec<Arc<dyn ReportSink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait::async_trait]
impl ReportSink for CompositeSink {
    /// Stops at the first failing sink.
    async fn publish(&self, report: &NetworkReport) -> Result<Vec<PathBuf>, DomainError> {
        let mut written = Vec::new();
        for sink in &self.sinks {
            written.extend(sink.publish(report).await?);
        }
        Ok(written)
    }
}
