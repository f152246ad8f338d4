//! Content partitioning engine
//!
//! Splits an in-memory text blob into an ordered sequence of parts by a
//! chosen strategy (fixed line count, fixed byte size, fixed part count,
//! or delimiter pattern), preserving byte and line provenance for each
//! part and optionally emitting a reconstruction manifest. The engine is
//! a pure function of (content, strategy, options); it performs no I/O
//! and keeps no state between calls.

pub mod balance;
pub mod engine;
pub mod manifest;
pub mod naming;
pub mod strategies;
pub mod types;

pub use engine::ContentSplitter;
pub use types::{
    BalanceStats, Part, SplitError, SplitOptions, SplitResult, SplitStrategy, MIN_SIZE_BYTES,
};
