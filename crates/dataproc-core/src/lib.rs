//! Integer sequence processing pipeline
//!
//! This crate cleans a sequence of signed integers, computes one summary
//! statistic over the cleaned values, and emits a single formatted result
//! line to the console or a text file.
//!
//! The pipeline has exactly three stages, always in this order:
//!
//! - **Clean**: drop negatives or clamp them to zero ([`cleaning`])
//! - **Analyze**: mean, median, population std dev, p90 (nearest rank),
//!   or the top-3 frequency sum ([`analysis`])
//! - **Emit**: write `Result = <value>` to the destination ([`output`])
//!
//! # Example
//!
//! ```
//! use dataproc_core::{process, AnalysisType, CleaningType, OutputMode};
//!
//! let result = process(
//!     CleaningType::RemoveNegatives,
//!     AnalysisType::Mean,
//!     &OutputMode::Console,
//!     &[5, -2, 7, 8],
//! )?;
//! assert_eq!(result, 20.0 / 3.0);
//! # Ok::<(), dataproc_core::ProcessError>(())
//! ```
//!
//! Statistics that are undefined on an empty cleaned sequence come back
//! as `f64::NAN` from [`process`]; the [`analysis::analyze`] entry point
//! exposes the same computation as an `Option<f64>` for callers that
//! want to distinguish the sentinel explicitly.

pub mod analysis;
pub mod cleaning;
pub mod error;
pub mod format;
pub mod output;
pub mod processor;

pub use analysis::{analyze, AnalysisType};
pub use cleaning::{clean, CleaningType};
pub use error::ProcessError;
pub use format::{format_value, result_line};
pub use output::{OutputMode, DEFAULT_RESULT_PATH};
pub use processor::process;
