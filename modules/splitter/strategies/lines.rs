//! Fixed-line-count partitioning with optional trailing-line overlap

use super::Segment;

/// Split content into strides of `lines_per_part` newline-delimited
/// records. With `overlap_lines > 0`, each stride after the first repeats
/// the trailing lines of its predecessor at its start.
///
/// Byte provenance uses a running cursor over consumed record lengths, so
/// repeated identical lines still map to the right offsets. Overlap never
/// shifts `start_byte`: it always points at the stride's own first record.
pub(crate) fn split_by_lines(content: &str, lines_per_part: usize, overlap_lines: usize) -> Vec<Segment> {
    let mut records: Vec<&str> = content.split('\n').collect();

    // A trailing newline produces one empty final record; drop it so the
    // last stride doesn't become a spurious empty part.
    if records.len() > 1 && records.last() == Some(&"") {
        records.pop();
    }

    // Running cursor: byte offset where each record starts.
    let mut offsets = Vec::with_capacity(records.len());
    let mut cursor = 0;
    for record in &records {
        offsets.push(cursor);
        cursor += record.len() + 1; // +1 for the consumed '\n'
    }

    let mut segments = Vec::new();
    let mut i = 0;
    while i < records.len() {
        let stride = &records[i..(i + lines_per_part).min(records.len())];
        let last = i + stride.len() - 1;
        let start_byte = offsets[i];
        let end_byte = offsets[last] + records[last].len();

        let mut text = String::new();
        if i > 0 && overlap_lines > 0 {
            let k = overlap_lines.min(i);
            for record in &records[i - k..i] {
                text.push_str(record);
                text.push('\n');
            }
        }
        text.push_str(&stride.join("\n"));

        segments.push(Segment {
            content: text,
            start_byte,
            end_byte,
        });
        i += lines_per_part;
    }

    segments
}
