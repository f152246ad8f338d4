//! Fixed-byte-budget partitioning with line-boundary snapping

use super::{snap_cut, Segment};

/// Split content into parts of at most `bytes_per_part` bytes, snapping
/// each cut to the nearest preceding newline within `lookback` bytes.
/// Every byte of the original content lands in exactly one part, in
/// order; when no snap point exists the raw budget cut is used.
pub(crate) fn split_by_size(content: &str, bytes_per_part: usize, lookback: usize) -> Vec<Segment> {
    let len = content.len();
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < len {
        let tentative_end = (pos + bytes_per_part).min(len);
        let end = snap_cut(content, pos, tentative_end, lookback);
        segments.push(Segment::new(&content[pos..end], pos, end));
        pos = end;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::splitter::strategies::BOUNDARY_LOOKBACK;

    #[test]
    fn test_sizes_without_newlines() {
        // 2500 bytes, no newlines: nothing to snap to, raw cuts only.
        let content = "x".repeat(2500);
        let segments = split_by_size(&content, 1024, BOUNDARY_LOOKBACK);
        let sizes: Vec<usize> = segments.iter().map(|s| s.content.len()).collect();
        assert_eq!(sizes, vec![1024, 1024, 452]);
    }

    #[test]
    fn test_parts_end_on_line_boundaries_when_possible() {
        let content = "aaaa\nbbbb\ncccc\ndddd\n";
        let segments = split_by_size(content, 7, BOUNDARY_LOOKBACK);
        for segment in &segments[..segments.len() - 1] {
            assert!(segment.content.ends_with('\n'));
        }
    }

    #[test]
    fn test_no_data_loss() {
        let content = "line one\nline two\nline three\nno trailing newline";
        for budget in [1, 3, 7, 16, 1000] {
            let segments = split_by_size(content, budget, BOUNDARY_LOOKBACK);
            let rebuilt: String = segments.iter().map(|s| s.content.as_str()).collect();
            assert_eq!(rebuilt, content, "budget {}", budget);
        }
    }

    #[test]
    fn test_adjacent_offsets() {
        let content = "aa\nbb\ncc\ndd";
        let segments = split_by_size(content, 4, BOUNDARY_LOOKBACK);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_byte, pair[1].start_byte);
        }
        assert_eq!(segments.last().unwrap().end_byte, content.len());
    }

    #[test]
    fn test_shrunk_lookback_skips_distant_newline() {
        let content = "a\nbbbbbbbbbbbbbbbb";
        // With a 2-byte lookback the newline at index 1 is out of range
        // for a cut at 10, so the raw cut is used.
        let segments = split_by_size(content, 10, 2);
        assert_eq!(segments[0].content.len(), 10);
    }

    #[test]
    fn test_multibyte_content_cuts_on_char_boundaries() {
        let content = "日本語のテキスト".repeat(10);
        let segments = split_by_size(&content, 10, BOUNDARY_LOOKBACK);
        let rebuilt: String = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(rebuilt, content);
    }
}
