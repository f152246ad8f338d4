//! Descriptive statistics over part sizes

use super::types::BalanceStats;

/// Compute balance statistics for a sequence of part byte sizes.
///
/// The score is `100 - (std_dev / average) * 100`, clamped to zero, so a
/// perfectly even split scores 100 and highly skewed splits approach 0.
/// Empty input (or an all-zero sequence) yields all-zero stats.
pub fn analyze(sizes: &[usize]) -> BalanceStats {
    if sizes.is_empty() {
        return BalanceStats::default();
    }

    let count = sizes.len() as f64;
    let average = sizes.iter().sum::<usize>() as f64 / count;
    let variance = sizes
        .iter()
        .map(|&s| {
            let d = s as f64 - average;
            d * d
        })
        .sum::<f64>()
        / count;
    let std_dev = variance.sqrt();

    let balance_score = if average == 0.0 {
        0.0
    } else {
        (100.0 - (std_dev / average) * 100.0).max(0.0)
    };

    BalanceStats {
        average_size: average,
        variance,
        std_dev,
        largest: *sizes.iter().max().unwrap_or(&0),
        smallest: *sizes.iter().min().unwrap_or(&0),
        balance_score,
    }
}
