//! The clean -> analyze -> emit pipeline.

use crate::analysis::{analyze, AnalysisType};
use crate::cleaning::{clean, CleaningType};
use crate::error::ProcessError;
use crate::format::result_line;
use crate::output::{emit, OutputMode};

/// Run the full pipeline over `data` and return the numeric result.
///
/// The input is cleaned, the selected statistic computed, and one line of
/// the form `Result = <value>` written to the chosen destination. The
/// numeric result is returned regardless of destination. Statistics that
/// are undefined on the (empty) cleaned sequence return `f64::NAN`;
/// callers that need to distinguish "no defined value" can check
/// `is_nan()` or call [`analyze`] directly for the `Option` form.
///
/// Each call is a single atomic unit of work with no state carried across
/// calls. Concurrent calls writing to the same file path race
/// last-writer-wins.
///
/// # Errors
///
/// Returns [`ProcessError::OutputError`] if file output fails.
///
/// # Examples
///
/// ```
/// use dataproc_core::{process, AnalysisType, CleaningType, OutputMode};
///
/// let r = process(
///     CleaningType::RemoveNegatives,
///     AnalysisType::Mean,
///     &OutputMode::Console,
///     &[5, -2, 7, 8],
/// )?;
/// assert_eq!(r, 20.0 / 3.0);
/// # Ok::<(), dataproc_core::ProcessError>(())
/// ```
pub fn process(
    cleaning: CleaningType,
    analysis: AnalysisType,
    output: &OutputMode,
    data: &[i32],
) -> Result<f64, ProcessError> {
    let cleaned = clean(cleaning, data);
    tracing::debug!(
        ?cleaning,
        input_len = data.len(),
        cleaned_len = cleaned.len(),
        "input cleaned"
    );

    let result = analyze(analysis, &cleaned).unwrap_or(f64::NAN);
    tracing::debug!(?analysis, result, "analysis complete");

    emit(output, &result_line(result))?;
    Ok(result)
}
