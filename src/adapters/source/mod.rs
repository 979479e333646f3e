//! Post sources. Implement PostSource for files on disk and in-memory corpora.

pub mod csv_source;
pub mod jsonl;
pub mod memory;

pub use csv_source::CsvPostSource;
pub use jsonl::JsonlPostSource;
pub use memory::MemoryPostSource;

use crate::domain::DomainError;
use crate::ports::PostSource;
use std::path::Path;
use std::sync::Arc;

/// Pick a source by file extension.
///
/// * `.jsonl` / `.ndjson` → [`JsonlPostSource`]
/// * `.csv` → [`CsvPostSource`] with `csv_delimiter`
/// * `.tsv` → [`CsvPostSource`] with a tab delimiter
pub fn open_source(
    path: impl AsRef<Path>,
    csv_delimiter: u8,
) -> Result<Arc<dyn PostSource>, DomainError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jsonl" | "ndjson" => Ok(Arc::new(JsonlPostSource::new(path))),
        "csv" => Ok(Arc::new(CsvPostSource::new(path).with_delimiter(csv_delimiter))),
        "tsv" => Ok(Arc::new(CsvPostSource::new(path).with_delimiter(b'\t'))),
        _ => Err(DomainError::Config(format!(
            "unsupported post file {} (expected .jsonl, .ndjson, .csv or .tsv)",
            path.display()
        ))),
    }
}
