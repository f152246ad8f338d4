//! Locally computed split commentary
//!
//! The surrounding layer normally asks a hosted text-generation service
//! for a JSON commentary object about a completed split. That output is
//! decorative; when the service is unreachable or returns something
//! unparsable, this fallback is substituted, built entirely from the
//! engine's own result.

use serde_json::{json, Value};

use crate::modules::splitter::SplitResult;

/// Build the fallback commentary object for a completed split.
///
/// Deterministic and offline: size distribution, an evenness label
/// derived from the balance score, and coarse speed/memory
/// classifications derived from total output size.
pub fn fallback_analysis(result: &SplitResult) -> Value {
    let sizes: Vec<usize> = result
        .parts
        .iter()
        .filter(|p| !p.is_index_manifest && p.error.is_none())
        .map(|p| p.content.len())
        .collect();

    let evenness = match result.stats.balance_score {
        s if s >= 90.0 => "very even",
        s if s >= 70.0 => "mostly even",
        s if s >= 40.0 => "uneven",
        _ => "highly uneven",
    };

    let speed = match result.total_size {
        0..=1_048_576 => "fast",
        1_048_577..=52_428_800 => "moderate",
        _ => "slow",
    };

    let memory = match result.total_size {
        0..=10_485_760 => "low",
        10_485_761..=104_857_600 => "moderate",
        _ => "high",
    };

    json!({
        "summary": format!(
            "Split produced {} parts totalling {} bytes",
            result.total_parts, result.total_size
        ),
        "size_distribution": sizes,
        "balance_score": result.stats.balance_score,
        "evenness": evenness,
        "performance": {
            "speed": speed,
            "memory": memory,
        },
    })
}
