//! Exact-part-count partitioning

use super::{snap_cut, Segment};

/// Split content into exactly `count` parts of near-equal byte size.
/// Starts are evenly spaced at multiples of `ceil(len / count)`; each end
/// is independently snapped with the shared newline rule, except the
/// final chunk, whose end is clamped to the content length. The declared
/// count is always honored, even if that means trailing empty parts.
pub(crate) fn split_by_chunks(content: &str, count: usize, lookback: usize) -> Vec<Segment> {
    let len = content.len();
    let chunk_size = len.div_ceil(count);
    let mut segments = Vec::with_capacity(count);

    for i in 0..count {
        let mut start = (i * chunk_size).min(len);
        while start < len && !content.is_char_boundary(start) {
            start += 1;
        }

        let end = if i + 1 == count {
            len
        } else {
            let tentative_end = ((i + 1) * chunk_size).min(len);
            snap_cut(content, start, tentative_end, lookback).max(start)
        };

        segments.push(Segment::new(&content[start..end], start, end));
    }

    segments
}
