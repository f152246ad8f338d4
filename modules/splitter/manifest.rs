//! Plain-text reconstruction manifest
//!
//! The manifest format is a contract, not free prose: field order and
//! presence are fixed, so downstream tooling can parse it.

use std::fmt::Write;

use chrono::{SecondsFormat, Utc};

use super::types::Part;

/// Render the reconstruction index for a completed split.
///
/// Lists the original file's name and size, the split timestamp, and one
/// line per numbered part with its generated filename, byte size, and
/// line range, followed by the fixed reconstruction steps.
pub fn generate_manifest(original_name: &str, original_size: usize, parts: &[Part]) -> String {
    let mut out = String::with_capacity(512 + parts.len() * 64);

    writeln!(out, "File Split Index").unwrap();
    writeln!(out, "================").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Original File: {}", original_name).unwrap();
    writeln!(out, "Original Size: {} bytes", original_size).unwrap();
    writeln!(
        out,
        "Split Date: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    )
    .unwrap();
    writeln!(out, "Total Parts: {}", parts.len()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Parts:").unwrap();
    writeln!(out, "------").unwrap();

    for part in parts {
        writeln!(
            out,
            "{}. {} ({} bytes, Lines {}-{})",
            part.index,
            part.filename,
            part.content.len(),
            part.start_line,
            part.end_line
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Reconstruction:").unwrap();
    writeln!(out, "---------------").unwrap();
    writeln!(out, "1. Concatenate all parts in order").unwrap();
    writeln!(out, "2. Verify file size matches original").unwrap();
    writeln!(out, "3. Check content integrity").unwrap();

    out
}
