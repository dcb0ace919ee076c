//! Input cleaning for the processing pipeline.
//!
//! Cleaning always runs before analysis, so analysis code can assume
//! every value it sees is non-negative regardless of the mode chosen.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProcessError;

/// How negative values are handled before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningType {
    /// Drop every element below zero; the cleaned sequence may be shorter.
    RemoveNegatives,
    /// Clamp every element below zero to zero; length is preserved.
    ReplaceNegativesWithZero,
}

impl FromStr for CleaningType {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "remove-negatives" => Ok(CleaningType::RemoveNegatives),
            "replace-negatives-with-zero" => Ok(CleaningType::ReplaceNegativesWithZero),
            other => Err(ProcessError::SelectorError(format!(
                "not a cleaning mode: {}",
                other
            ))),
        }
    }
}

/// Clean raw input values according to `mode`.
///
/// The caller's slice is never mutated; a fresh vector is returned with
/// the original relative order preserved.
///
/// # Examples
///
/// ```
/// use dataproc_core::cleaning::{clean, CleaningType};
///
/// let data = [5, -2, 7, 8];
/// assert_eq!(clean(CleaningType::RemoveNegatives, &data), vec![5, 7, 8]);
/// assert_eq!(
///     clean(CleaningType::ReplaceNegativesWithZero, &data),
///     vec![5, 0, 7, 8]
/// );
/// ```
pub fn clean(mode: CleaningType, data: &[i32]) -> Vec<i32> {
    match mode {
        CleaningType::RemoveNegatives => data.iter().copied().filter(|&x| x >= 0).collect(),
        CleaningType::ReplaceNegativesWithZero => {
            data.iter().map(|&x| if x < 0 { 0 } else { x }).collect()
        }
    }
}
