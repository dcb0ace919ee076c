//! Summary statistics over cleaned input.
//!
//! Every function here operates on already-cleaned values (no negatives).
//! Statistics that are undefined for an empty sequence return `None`;
//! callers that need the original NaN-sentinel contract convert at the
//! boundary (see [`crate::processor::process`]).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProcessError;

/// Which summary statistic to compute from the cleaned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Arithmetic mean (sum / count).
    Mean,
    /// Median; even counts average the two middle elements.
    Median,
    /// Population standard deviation (divisor N, not N-1).
    StdDev,
    /// 90th percentile by the nearest-rank method.
    P90NearestRank,
    /// Sum of the three largest value frequencies.
    Top3FrequentCountSum,
}

impl FromStr for AnalysisType {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "mean" => Ok(AnalysisType::Mean),
            "median" => Ok(AnalysisType::Median),
            "std-dev" => Ok(AnalysisType::StdDev),
            "p90-nearest-rank" | "p90" => Ok(AnalysisType::P90NearestRank),
            "top3-frequent-count-sum" | "top3" => Ok(AnalysisType::Top3FrequentCountSum),
            other => Err(ProcessError::SelectorError(format!(
                "not an analysis: {}",
                other
            ))),
        }
    }
}

/// Run the selected analysis over cleaned values.
///
/// # Returns
///
/// * `Some(value)` - The computed statistic
/// * `None` - If the statistic is undefined for the input (empty sequence
///   for everything except [`AnalysisType::Top3FrequentCountSum`], which
///   is defined as `0.0` on empty input)
///
/// # Examples
///
/// ```
/// use dataproc_core::analysis::{analyze, AnalysisType};
///
/// assert_eq!(analyze(AnalysisType::Mean, &[2, 4]), Some(3.0));
/// assert_eq!(analyze(AnalysisType::Mean, &[]), None);
/// assert_eq!(analyze(AnalysisType::Top3FrequentCountSum, &[]), Some(0.0));
/// ```
pub fn analyze(kind: AnalysisType, cleaned: &[i32]) -> Option<f64> {
    if cleaned.is_empty() {
        return match kind {
            AnalysisType::Top3FrequentCountSum => Some(0.0),
            _ => None,
        };
    }

    match kind {
        AnalysisType::Mean => mean(cleaned),
        AnalysisType::Median => median(cleaned),
        AnalysisType::StdDev => std_dev(cleaned),
        AnalysisType::P90NearestRank => p90_nearest_rank(cleaned),
        AnalysisType::Top3FrequentCountSum => Some(top3_frequent_count_sum(cleaned)),
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&x| x as f64).sum();
    Some(sum / values.len() as f64)
}

/// Median of the values.
///
/// Odd counts take the middle element after sorting; even counts average
/// the two middle elements as a real number (not truncated).
///
/// # Examples
///
/// ```
/// use dataproc_core::analysis::median;
///
/// assert_eq!(median(&[1, 2, 3]), Some(2.0));
/// assert_eq!(median(&[1, 2, 3, 4]), Some(2.5));
/// ```
pub fn median(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2] as f64)
    } else {
        Some((sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0)
    }
}

/// Population standard deviation (divide by N, not N-1).
pub fn std_dev(values: &[i32]) -> Option<f64> {
    let m = mean(values)?;
    let acc: f64 = values
        .iter()
        .map(|&x| {
            let d = x as f64 - m;
            d * d
        })
        .sum();
    Some((acc / values.len() as f64).sqrt())
}

/// 90th percentile by the nearest-rank method.
///
/// After sorting ascending, the result is the element at 1-based rank
/// `ceil(0.90 * N)`, clamped to `[1, N]`.
///
/// # Examples
///
/// ```
/// use dataproc_core::analysis::p90_nearest_rank;
///
/// let data: Vec<i32> = (1..=10).collect();
/// assert_eq!(p90_nearest_rank(&data), Some(9.0));
/// ```
pub fn p90_nearest_rank(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let rank = (0.90 * n as f64).ceil() as usize;
    let rank = rank.clamp(1, n);
    Some(sorted[rank - 1] as f64)
}

/// Sum of the three largest value frequencies.
///
/// Sorts the values, computes the run-length of each distinct value, and
/// sums the largest three run-lengths (or fewer, if fewer than three
/// distinct values exist). Empty input sums to `0.0`.
///
/// # Examples
///
/// ```
/// use dataproc_core::analysis::top3_frequent_count_sum;
///
/// // Frequencies: 1 -> 2, 2 -> 3, 3 -> 1, 4 -> 4; top three sum to 9.
/// assert_eq!(top3_frequent_count_sum(&[1, 1, 2, 2, 2, 3, 4, 4, 4, 4]), 9.0);
/// ```
pub fn top3_frequent_count_sum(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut counts = Vec::new();
    let mut run = 1u64;
    for window in sorted.windows(2) {
        if window[0] == window[1] {
            run += 1;
        } else {
            counts.push(run);
            run = 1;
        }
    }
    counts.push(run);

    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.iter().take(3).sum::<u64>() as f64
}
