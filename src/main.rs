//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the service, run.
//! No business logic here; inference and ranking live in the use cases.

use dotenv::dotenv;
use mention_graph::adapters::report::{CompositeSink, JsonReport, MarkdownReport};
use mention_graph::adapters::source::open_source;
use mention_graph::ports::{InputPort, ReportSink};
use mention_graph::shared::config::AppConfig;
use mention_graph::usecases::{GraphBuilder, NetworkService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    // First positional argument wins over MENTION_GRAPH_POSTS_PATH.
    let posts_path = std::env::args()
        .nth(1)
        .or_else(|| cfg.posts_path.clone())
        .unwrap_or_default();
    if posts_path.is_empty() {
        anyhow::bail!(
            "No post corpus given. Pass a .jsonl/.csv path or set MENTION_GRAPH_POSTS_PATH"
        );
    }

    let delimiter = cfg
        .csv_delimiter_or_default()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let source = open_source(&posts_path, delimiter).map_err(|e| anyhow::anyhow!("{}", e))?;

    let reports_dir = PathBuf::from(cfg.reports_dir_or_default());
    info!(path = %reports_dir.display(), "reports directory");
    let sinks: Vec<Arc<dyn ReportSink>> = vec![
        Arc::new(MarkdownReport::new(reports_dir.clone())),
        Arc::new(JsonReport::new(reports_dir)),
    ];
    let sink: Arc<dyn ReportSink> = Arc::new(CompositeSink::new(sinks));

    let builder = GraphBuilder::new().with_reply_evidence(cfg.reply_evidence_or_default());
    let service = NetworkService::new(source, sink, builder, cfg.top_n);

    let report = service.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    for (rank, inf) in report.influencers.iter().enumerate() {
        println!("{:>4}. @{} ({} followers)", rank + 1, inf.username, inf.followers);
    }
    if report.influencers.is_empty() {
        println!("No user has any inferred followers.");
    }

    Ok(())
}
