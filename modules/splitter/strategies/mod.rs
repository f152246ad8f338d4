//! Partitioning strategies
//!
//! One partitioner per strategy variant. Each produces a sequence of
//! [`Segment`]s carrying content plus byte provenance; the engine turns
//! segments into finished parts (line numbers, filenames, indices).

pub mod bytes;
pub mod chunks;
pub mod lines;
pub mod pattern;

/// Lookback window, in bytes, for snapping a cut point to the nearest
/// preceding newline. Tunable so tests can shrink it.
pub const BOUNDARY_LOOKBACK: usize = 100;

/// A contiguous slice of the original content, before naming/indexing
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub content: String,
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Segment {
    pub fn new(content: &str, start_byte: usize, end_byte: usize) -> Self {
        Self {
            content: content.to_string(),
            start_byte,
            end_byte,
        }
    }
}

/// Snap a tentative cut point to just after the nearest preceding newline
/// within `lookback` bytes, so parts end on line boundaries whenever
/// reasonably possible. Falls back to the raw cut, adjusted to a UTF-8
/// character boundary, when no newline is in range. Never moves the cut
/// to or before `start`.
pub(crate) fn snap_cut(content: &str, start: usize, tentative_end: usize, lookback: usize) -> usize {
    let len = content.len();
    if tentative_end >= len {
        return len;
    }

    let bytes = content.as_bytes();
    let window_start = tentative_end.saturating_sub(lookback).max(start + 1);
    if window_start < tentative_end {
        if let Some(nl) = bytes[window_start..tentative_end]
            .iter()
            .rposition(|&b| b == b'\n')
        {
            return window_start + nl + 1;
        }
    }

    // No newline in range: keep the raw cut but never split a code point.
    let mut end = tentative_end;
    while end > start + 1 && !content.is_char_boundary(end) {
        end -= 1;
    }
    while end < len && !content.is_char_boundary(end) {
        end += 1;
    }
    end
}
