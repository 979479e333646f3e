//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Post source error: {0}")]
    Source(String),

    #[error("Report sink error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Degenerate input the core refuses to process (e.g. a post without an author).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
