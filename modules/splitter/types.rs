use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sanity floor for the Size strategy: callers asking for parts smaller
/// than this almost certainly passed a line count by mistake.
pub const MIN_SIZE_BYTES: usize = 1024;

/// Errors surfaced by the splitting engine
#[derive(Debug, Error)]
pub enum SplitError {
    /// Unknown method name, wrong value type, or value below the
    /// method's minimum. Raised before any partitioning runs.
    #[error("invalid split strategy: {0}")]
    InvalidStrategy(String),

    /// An internal error during a specific strategy's execution, e.g. an
    /// invalid delimiter pattern. Recovered at the engine boundary into a
    /// synthetic failed part rather than propagated to the caller.
    #[error("partitioning failed: {0}")]
    PartitionFailure(String),
}

/// How to partition the content, validated before any partitioner runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Fixed number of newline-delimited records per part
    Lines(usize),
    /// Fixed byte budget per part, snapped to line boundaries
    Size(usize),
    /// Exact number of near-equal parts
    Chunks(usize),
    /// Split at every match of a delimiter pattern
    Pattern(String),
}

impl SplitStrategy {
    /// Validate a raw (method, value) pair as it arrives from a request.
    ///
    /// Runs before any partitioner executes; partitioners assume
    /// pre-validated input and never re-check.
    pub fn from_request(method: &str, value: &serde_json::Value) -> Result<Self, SplitError> {
        match method {
            "lines" => Ok(SplitStrategy::Lines(positive_value(value)?)),
            "chunks" => Ok(SplitStrategy::Chunks(positive_value(value)?)),
            "size" => {
                let bytes = positive_value(value)?;
                if bytes < MIN_SIZE_BYTES {
                    return Err(SplitError::InvalidStrategy(format!(
                        "size splits must be at least {} bytes",
                        MIN_SIZE_BYTES
                    )));
                }
                Ok(SplitStrategy::Size(bytes))
            }
            "pattern" => match value.as_str() {
                Some(expr) if !expr.is_empty() => Ok(SplitStrategy::Pattern(expr.to_string())),
                _ => Err(SplitError::InvalidStrategy(
                    "split pattern must be a non-empty string".to_string(),
                )),
            },
            other => Err(SplitError::InvalidStrategy(format!(
                "unknown split method '{}'",
                other
            ))),
        }
    }

    /// Short method name, matching the request-side spelling
    pub fn method_name(&self) -> &'static str {
        match self {
            SplitStrategy::Lines(_) => "lines",
            SplitStrategy::Size(_) => "size",
            SplitStrategy::Chunks(_) => "chunks",
            SplitStrategy::Pattern(_) => "pattern",
        }
    }
}

fn positive_value(value: &serde_json::Value) -> Result<usize, SplitError> {
    match value.as_i64() {
        Some(n) if n > 0 => Ok(n as usize),
        _ => Err(SplitError::InvalidStrategy(
            "split value must be a positive number".to_string(),
        )),
    }
}

/// Configuration for a split operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Number of trailing lines from the previous part repeated at the
    /// start of the next (Lines strategy only)
    #[serde(default)]
    pub overlap_lines: usize,
    /// Whether generated filenames carry a zero-padded part number
    #[serde(default = "default_true")]
    pub include_part_number: bool,
    /// Filename prefix overriding the original file's stem
    #[serde(default)]
    pub custom_prefix: Option<String>,
    /// Whether to append a reconstruction manifest to the part list
    #[serde(default)]
    pub create_index: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            overlap_lines: 0,
            include_part_number: true,
            custom_prefix: None,
            create_index: false,
        }
    }
}

/// One output unit of a split operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The part's text content
    pub content: String,
    /// Generated output filename for this part
    pub filename: String,
    /// 1-based line number at which this part starts in the original
    pub start_line: usize,
    /// 1-based line number at which this part ends in the original
    pub end_line: usize,
    /// Byte offset of the part's start in the original content
    pub start_byte: usize,
    /// Byte offset just past the part's end in the original content
    pub end_byte: usize,
    /// 1-based position among numbered parts; 0 for the manifest and for
    /// the synthetic failed part
    pub index: usize,
    /// Whether this part is the reconstruction manifest
    pub is_index_manifest: bool,
    /// Error message when a strategy failed mid-partition; a result
    /// containing such a part is a failed split, not a crash
    pub error: Option<String>,
}

/// Complete result of a split operation; parts are in output order and
/// are never reordered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    pub parts: Vec<Part>,
    /// Number of numbered parts (manifest and error parts excluded)
    pub total_parts: usize,
    /// Sum of all numbered parts' content lengths in bytes
    pub total_size: usize,
    pub stats: BalanceStats,
}

impl SplitResult {
    /// An empty result: the valid terminal outcome for empty input
    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            total_parts: 0,
            total_size: 0,
            stats: BalanceStats::default(),
        }
    }

    /// Whether any part carries a partition failure
    pub fn is_failed(&self) -> bool {
        self.parts.iter().any(|p| p.error.is_some())
    }
}

/// Descriptive statistics over the numbered parts' byte sizes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceStats {
    pub average_size: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub largest: usize,
    pub smallest: usize,
    /// 0-100, higher = more evenly sized parts
    pub balance_score: f64,
}
