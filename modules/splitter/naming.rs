//! Deterministic output filename derivation for parts

use super::types::SplitOptions;

/// Build the output filename for one numbered part.
///
/// The original name is split into stem and extension at the last `.`;
/// the prefix is `custom_prefix` when set, the stem otherwise. With
/// `include_part_number` the index is appended as `_part` plus a number
/// zero-padded to at least two digits (wider when `total_parts` needs
/// it). Pure and deterministic; duplicate prefixes are the caller's
/// responsibility.
pub fn part_filename(
    original_name: &str,
    part_index: usize,
    total_parts: usize,
    options: &SplitOptions,
) -> String {
    let (stem, extension) = split_extension(original_name);
    let prefix = options.custom_prefix.as_deref().unwrap_or(stem);

    if options.include_part_number {
        let width = total_parts.to_string().len().max(2);
        format!("{}_part{:0width$}{}", prefix, part_index, extension)
    } else {
        format!("{}{}", prefix, extension)
    }
}

/// Filename for the reconstruction manifest, sharing the part prefix rule
pub fn index_filename(original_name: &str, options: &SplitOptions) -> String {
    let (stem, _) = split_extension(original_name);
    let prefix = options.custom_prefix.as_deref().unwrap_or(stem);
    format!("{}_index.txt", prefix)
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot..]),
        None => (name, ""),
    }
}
