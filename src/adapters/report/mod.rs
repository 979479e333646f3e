//! Report sinks. Implement ReportSink by writing files into a reports directory.

pub mod composite;
pub mod json;
pub mod markdown;

pub use composite::CompositeSink;
pub use json::JsonReport;
pub use markdown::MarkdownReport;
