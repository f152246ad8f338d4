//! Engine boundary: validation, strategy dispatch, part assembly

use tracing::{debug, info, warn};

use super::balance;
use super::manifest::generate_manifest;
use super::naming::{index_filename, part_filename};
use super::strategies::{self, Segment, BOUNDARY_LOOKBACK};
use super::types::{Part, SplitError, SplitOptions, SplitResult, SplitStrategy};

/// Content partitioning engine.
///
/// A pure function of (content, strategy, options): no I/O, no state
/// between calls, safe to use from multiple threads. The caller keeps
/// ownership of the content; the engine only reads it.
pub struct ContentSplitter {
    lookback: usize,
}

impl ContentSplitter {
    /// Engine with the default newline-snap lookback window
    pub fn new() -> Self {
        Self {
            lookback: BOUNDARY_LOOKBACK,
        }
    }

    /// Engine with a custom lookback window, mainly for tests that want
    /// small, deterministic boundary-snap cases
    pub fn with_lookback(lookback: usize) -> Self {
        Self { lookback }
    }

    /// Validate a raw (method, value) request pair, then split.
    ///
    /// Validation failures are fatal and returned as
    /// [`SplitError::InvalidStrategy`] before any partitioning runs.
    pub fn split_request(
        &self,
        content: &str,
        original_name: &str,
        method: &str,
        value: &serde_json::Value,
        options: &SplitOptions,
    ) -> Result<SplitResult, SplitError> {
        let strategy = SplitStrategy::from_request(method, value)?;
        Ok(self.split(content, original_name, &strategy, options))
    }

    /// Split content with a pre-validated strategy.
    ///
    /// Always returns a `SplitResult`: empty content yields zero parts,
    /// and a strategy-internal failure is downgraded to a single
    /// error-flagged part so the layers above can still render something.
    pub fn split(
        &self,
        content: &str,
        original_name: &str,
        strategy: &SplitStrategy,
        options: &SplitOptions,
    ) -> SplitResult {
        if content.is_empty() {
            debug!("empty content, returning zero parts");
            return SplitResult::empty();
        }

        info!(
            "Splitting {} bytes with '{}' strategy",
            content.len(),
            strategy.method_name()
        );

        let segments = match self.run_strategy(content, strategy, options) {
            Ok(segments) => segments,
            Err(e) => {
                warn!("'{}' strategy failed: {}", strategy.method_name(), e);
                return failed_result(&e);
            }
        };

        self.assemble(content, original_name, segments, options)
    }

    fn run_strategy(
        &self,
        content: &str,
        strategy: &SplitStrategy,
        options: &SplitOptions,
    ) -> Result<Vec<Segment>, SplitError> {
        match strategy {
            SplitStrategy::Lines(n) => Ok(strategies::lines::split_by_lines(
                content,
                *n,
                options.overlap_lines,
            )),
            SplitStrategy::Size(bytes) => {
                Ok(strategies::bytes::split_by_size(content, *bytes, self.lookback))
            }
            SplitStrategy::Chunks(count) => {
                Ok(strategies::chunks::split_by_chunks(content, *count, self.lookback))
            }
            SplitStrategy::Pattern(expr) => strategies::pattern::split_by_pattern(content, expr),
        }
    }

    fn assemble(
        &self,
        content: &str,
        original_name: &str,
        segments: Vec<Segment>,
        options: &SplitOptions,
    ) -> SplitResult {
        let total = segments.len();
        let mut parts: Vec<Part> = segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| Part {
                filename: part_filename(original_name, i + 1, total, options),
                start_line: line_number(content, segment.start_byte),
                end_line: line_number(content, segment.end_byte),
                start_byte: segment.start_byte,
                end_byte: segment.end_byte,
                index: i + 1,
                is_index_manifest: false,
                error: None,
                content: segment.content,
            })
            .collect();

        let sizes: Vec<usize> = parts.iter().map(|p| p.content.len()).collect();
        let total_size: usize = sizes.iter().sum();
        let stats = balance::analyze(&sizes);

        if options.create_index {
            let manifest_text = generate_manifest(original_name, content.len(), &parts);
            parts.push(Part {
                content: manifest_text,
                filename: index_filename(original_name, options),
                start_line: 0,
                end_line: 0,
                start_byte: 0,
                end_byte: 0,
                index: 0,
                is_index_manifest: true,
                error: None,
            });
        }

        SplitResult {
            total_parts: total,
            total_size,
            stats,
            parts,
        }
    }
}

impl Default for ContentSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based line number at a byte offset: the count of newlines in the
/// content preceding it, plus one. Informational only; never used to
/// re-slice content.
fn line_number(content: &str, byte_offset: usize) -> usize {
    content.as_bytes()[..byte_offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Downgrade a partition failure to a result whose single part carries
/// the error message; callers treat this as a failed split, not a crash.
fn failed_result(error: &SplitError) -> SplitResult {
    SplitResult {
        parts: vec![Part {
            content: String::new(),
            filename: String::new(),
            start_line: 0,
            end_line: 0,
            start_byte: 0,
            end_byte: 0,
            index: 0,
            is_index_manifest: false,
            error: Some(error.to_string()),
        }],
        total_parts: 0,
        total_size: 0,
        stats: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_counts_preceding_newlines() {
        let content = "a\nb\nc";
        assert_eq!(line_number(content, 0), 1);
        assert_eq!(line_number(content, 2), 2);
        assert_eq!(line_number(content, 4), 3);
    }

    #[test]
    fn test_parts_carry_line_provenance() {
        let splitter = ContentSplitter::new();
        let result = splitter.split(
            "a\nb\nc\nd",
            "log.txt",
            &SplitStrategy::Lines(2),
            &SplitOptions::default(),
        );
        assert_eq!(result.parts[0].start_line, 1);
        assert_eq!(result.parts[0].end_line, 2);
        assert_eq!(result.parts[1].start_line, 3);
        assert_eq!(result.parts[1].end_line, 4);
    }

    #[test]
    fn test_indices_are_contiguous_from_one() {
        let splitter = ContentSplitter::new();
        let result = splitter.split(
            "x".repeat(100).as_str(),
            "data.bin.txt",
            &SplitStrategy::Chunks(4),
            &SplitOptions::default(),
        );
        let indices: Vec<usize> = result.parts.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pattern_failure_downgraded_to_error_part() {
        let splitter = ContentSplitter::new();
        let result = splitter.split(
            "some content",
            "log.txt",
            &SplitStrategy::Pattern("[unclosed".to_string()),
            &SplitOptions::default(),
        );
        assert!(result.is_failed());
        assert_eq!(result.total_parts, 0);
        assert_eq!(result.parts.len(), 1);
        assert!(result.parts[0]
            .error
            .as_deref()
            .unwrap()
            .contains("invalid delimiter pattern"));
    }

    #[test]
    fn test_empty_content_is_not_an_error() {
        let splitter = ContentSplitter::new();
        for strategy in [
            SplitStrategy::Lines(10),
            SplitStrategy::Size(2048),
            SplitStrategy::Chunks(3),
            SplitStrategy::Pattern("---".to_string()),
        ] {
            let result = splitter.split("", "log.txt", &strategy, &SplitOptions::default());
            assert_eq!(result.total_parts, 0);
            assert!(result.parts.is_empty());
            assert!(!result.is_failed());
        }
    }
}
