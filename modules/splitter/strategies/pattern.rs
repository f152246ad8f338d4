//! Delimiter-pattern partitioning

use regex::Regex;

use super::Segment;
use crate::modules::splitter::types::SplitError;

/// Split content at every non-overlapping match of `expr`, consuming the
/// matched delimiter text between parts. Zero matches yield the whole
/// content as a single part. An empty span before a match is kept only
/// when no part has been emitted yet.
pub(crate) fn split_by_pattern(content: &str, expr: &str) -> Result<Vec<Segment>, SplitError> {
    let delimiter = Regex::new(expr)
        .map_err(|e| SplitError::PartitionFailure(format!("invalid delimiter pattern: {}", e)))?;

    let mut segments: Vec<Segment> = Vec::new();
    let mut last_end = 0;

    for m in delimiter.find_iter(content) {
        let span = &content[last_end..m.start()];
        if !span.is_empty() || segments.is_empty() {
            segments.push(Segment::new(span, last_end, m.start()));
        }
        last_end = m.end();
    }

    if last_end < content.len() {
        segments.push(Segment::new(
            &content[last_end..],
            last_end,
            content.len(),
        ));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_delimiter() {
        let segments = split_by_pattern("X---Y---Z", "---").unwrap();
        let contents: Vec<&str> = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_delimiters_are_consumed() {
        let segments = split_by_pattern("a==b==c", "==").unwrap();
        for segment in &segments {
            assert!(!segment.content.contains("=="));
        }
    }

    #[test]
    fn test_regex_delimiter() {
        let segments = split_by_pattern("one1two22three", r"\d+").unwrap();
        let contents: Vec<&str> = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_no_match_yields_whole_content() {
        let segments = split_by_pattern("no delimiters here", "---").unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "no delimiters here");
        assert_eq!(segments[0].start_byte, 0);
        assert_eq!(segments[0].end_byte, 18);
    }

    #[test]
    fn test_leading_delimiter_keeps_empty_first_part_only() {
        let segments = split_by_pattern("---X---Y", "---").unwrap();
        let contents: Vec<&str> = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["", "X", "Y"]);
    }

    #[test]
    fn test_consecutive_delimiters_drop_interior_empty_spans() {
        let segments = split_by_pattern("X------Y", "---").unwrap();
        let contents: Vec<&str> = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["X", "Y"]);
    }

    #[test]
    fn test_delimiter_only_content() {
        let segments = split_by_pattern("---", "---").unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "");
    }

    #[test]
    fn test_trailing_delimiter_drops_empty_tail() {
        let segments = split_by_pattern("X---", "---").unwrap();
        let contents: Vec<&str> = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["X"]);
    }

    #[test]
    fn test_invalid_pattern_is_a_partition_failure() {
        let err = split_by_pattern("abc", "[unclosed").unwrap_err();
        assert!(matches!(err, SplitError::PartitionFailure(_)));
    }

    #[test]
    fn test_offsets_skip_matched_text() {
        let segments = split_by_pattern("X---Y", "---").unwrap();
        assert_eq!(segments[0].start_byte, 0);
        assert_eq!(segments[0].end_byte, 1);
        assert_eq!(segments[1].start_byte, 4);
        assert_eq!(segments[1].end_byte, 5);
    }
}
