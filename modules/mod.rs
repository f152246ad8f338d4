//! Library for text content partitioning
//!
//! This library provides modules for:
//! - Splitting text blobs by line count, byte size, part count, or
//!   delimiter pattern, with byte/line provenance per part
//! - Deterministic part naming and an optional reconstruction manifest
//! - Balance statistics and a locally computed fallback commentary

pub mod analysis;
pub mod splitter;

// Re-export commonly used types and structs
pub use analysis::fallback_analysis;
pub use splitter::{
    BalanceStats, ContentSplitter, Part, SplitError, SplitOptions, SplitResult, SplitStrategy,
};
