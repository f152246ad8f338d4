//! # File Split Engine
//!
//! A library for partitioning an in-memory text blob into an ordered
//! sequence of parts:
//! - Four strategies: fixed line count (with trailing-line overlap),
//!   fixed byte size, exact part count, and delimiter pattern
//! - Byte and line provenance on every part
//! - Deterministic part naming and an optional reconstruction manifest
//! - Balance statistics and an offline fallback commentary
//!
//! ## Example Usage
//!
//! ```rust
//! use file_split_engine::{ContentSplitter, SplitOptions, SplitStrategy};
//!
//! let splitter = ContentSplitter::new();
//! let options = SplitOptions {
//!     create_index: true,
//!     ..Default::default()
//! };
//!
//! let result = splitter.split(
//!     "first\nsecond\nthird\nfourth",
//!     "notes.txt",
//!     &SplitStrategy::Lines(2),
//!     &options,
//! );
//!
//! assert_eq!(result.total_parts, 2);
//! assert_eq!(result.parts[0].filename, "notes_part01.txt");
//! assert!(result.parts.last().unwrap().is_index_manifest);
//! ```

// Include the modules from the modules directory
#[path = "../modules/mod.rs"]
pub mod modules;

// Re-export everything from modules for easy access
pub use modules::*;

// Re-export commonly used external types for convenience
pub use anyhow::{Context, Result};
pub use serde::{Deserialize, Serialize};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library information
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
