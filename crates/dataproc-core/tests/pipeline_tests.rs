//! End-to-end tests for the clean -> analyze -> emit pipeline.
//!
//! Exercises the public `process` entry point against known fixtures,
//! including the exact text written under file output.

use pretty_assertions::assert_eq;
use std::fs;

use dataproc_core::{process, result_line, AnalysisType, CleaningType, OutputMode, ProcessError};

fn file_mode(dir: &tempfile::TempDir, name: &str) -> OutputMode {
    OutputMode::TextFile(dir.path().join(name))
}

fn read_back(mode: &OutputMode) -> String {
    let OutputMode::TextFile(path) = mode else {
        panic!("expected file mode");
    };
    fs::read_to_string(path).unwrap()
}

#[test]
fn mean_after_remove_negatives_matches_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let mode = file_mode(&dir, "result.txt");

    let r = process(
        CleaningType::RemoveNegatives,
        AnalysisType::Mean,
        &mode,
        &[5, -2, 7, 8],
    )
    .unwrap();

    assert_eq!(r, 20.0 / 3.0);
    assert_eq!(read_back(&mode), "Result = 6.666666666666667");
}

#[test]
fn median_even_count_averages_middle_pair() {
    let r = process(
        CleaningType::RemoveNegatives,
        AnalysisType::Median,
        &OutputMode::Console,
        &[1, 2, 3, 4],
    )
    .unwrap();
    assert_eq!(r, 2.5);
}

#[test]
fn median_odd_count_takes_middle_element() {
    let dir = tempfile::tempdir().unwrap();
    let mode = file_mode(&dir, "result.txt");

    let r = process(CleaningType::RemoveNegatives, AnalysisType::Median, &mode, &[1, 2, 3]).unwrap();

    assert_eq!(r, 2.0);
    assert_eq!(read_back(&mode), "Result = 2.0");
}

#[test]
fn std_dev_uses_population_divisor() {
    let r = process(
        CleaningType::RemoveNegatives,
        AnalysisType::StdDev,
        &OutputMode::Console,
        &[2, 4, 4, 4, 5, 5, 7, 9],
    )
    .unwrap();
    assert_eq!(r, 2.0);
}

#[test]
fn p90_nearest_rank_on_one_to_ten() {
    let data: Vec<i32> = (1..=10).collect();
    let r = process(
        CleaningType::RemoveNegatives,
        AnalysisType::P90NearestRank,
        &OutputMode::Console,
        &data,
    )
    .unwrap();
    assert_eq!(r, 9.0);
}

#[test]
fn top3_frequent_count_sum_fixture() {
    let r = process(
        CleaningType::RemoveNegatives,
        AnalysisType::Top3FrequentCountSum,
        &OutputMode::Console,
        &[1, 1, 2, 2, 2, 3, 4, 4, 4, 4],
    )
    .unwrap();
    assert_eq!(r, 9.0);
}

#[test]
fn empty_input_is_nan_for_all_but_top3() {
    for kind in [
        AnalysisType::Mean,
        AnalysisType::Median,
        AnalysisType::StdDev,
        AnalysisType::P90NearestRank,
    ] {
        let r = process(CleaningType::RemoveNegatives, kind, &OutputMode::Console, &[]).unwrap();
        assert!(r.is_nan(), "{:?} on empty input should be NaN", kind);
    }

    let r = process(
        CleaningType::RemoveNegatives,
        AnalysisType::Top3FrequentCountSum,
        &OutputMode::Console,
        &[],
    )
    .unwrap();
    assert_eq!(r, 0.0);
}

#[test]
fn nan_sentinel_renders_as_nan_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let mode = file_mode(&dir, "result.txt");

    process(CleaningType::RemoveNegatives, AnalysisType::Mean, &mode, &[-1, -2]).unwrap();

    assert_eq!(read_back(&mode), "Result = NaN");
}

#[test]
fn file_output_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let mode = OutputMode::TextFile(dir.path().join("nested").join("deep").join("result.txt"));

    process(CleaningType::RemoveNegatives, AnalysisType::Mean, &mode, &[1, 2, 3]).unwrap();

    assert_eq!(read_back(&mode), "Result = 2.0");
}

#[test]
fn file_output_has_no_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let mode = file_mode(&dir, "result.txt");

    process(CleaningType::RemoveNegatives, AnalysisType::Mean, &mode, &[4]).unwrap();

    let content = read_back(&mode);
    assert!(!content.ends_with('\n'));
    assert_eq!(content, "Result = 4.0");
}

#[test]
fn second_call_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let mode = file_mode(&dir, "result.txt");

    process(CleaningType::RemoveNegatives, AnalysisType::Mean, &mode, &[1, 1]).unwrap();
    process(CleaningType::RemoveNegatives, AnalysisType::Mean, &mode, &[10, 10]).unwrap();

    assert_eq!(read_back(&mode), "Result = 10.0");
}

#[test]
fn file_write_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    // Point the output at an existing directory so the write must fail.
    let mode = OutputMode::TextFile(dir.path().to_path_buf());

    let err = process(CleaningType::RemoveNegatives, AnalysisType::Mean, &mode, &[1])
        .unwrap_err();
    assert!(matches!(err, ProcessError::OutputError(_)));
}

#[test]
fn returned_value_matches_emitted_line() {
    let dir = tempfile::tempdir().unwrap();
    let mode = file_mode(&dir, "result.txt");

    let r = process(
        CleaningType::ReplaceNegativesWithZero,
        AnalysisType::StdDev,
        &mode,
        &[3, -1, 4, -1, 5],
    )
    .unwrap();

    assert_eq!(read_back(&mode), result_line(r));
}

#[test]
fn selector_enums_round_trip_through_serde() {
    let cleaning: CleaningType = serde_json::from_str("\"remove_negatives\"").unwrap();
    assert_eq!(cleaning, CleaningType::RemoveNegatives);

    let json = serde_json::to_string(&AnalysisType::Top3FrequentCountSum).unwrap();
    assert_eq!(json, "\"top3_frequent_count_sum\"");

    let mode: OutputMode = serde_json::from_str(&json_of(&OutputMode::text_file())).unwrap();
    assert_eq!(mode, OutputMode::text_file());
}

fn json_of(mode: &OutputMode) -> String {
    serde_json::to_string(mode).unwrap()
}
