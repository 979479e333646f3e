//! Infrastructure adapters. Implement outbound ports.
//!
//! Post corpora on disk, report files. Map errors to DomainError.

pub mod report;
pub mod source;
