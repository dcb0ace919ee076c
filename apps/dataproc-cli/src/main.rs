//! Data processor CLI
//!
//! Entry point wiring the clean -> analyze -> emit pipeline to the
//! command line. Selector values accept both kebab-case and the
//! upper-snake spellings (`remove-negatives`, `REMOVE_NEGATIVES`).

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dataproc_core::{format_value, process, AnalysisType, CleaningType, OutputMode};

#[derive(Parser, Debug)]
#[command(name = "dataproc")]
#[command(
    version,
    about = "Clean a list of integers, run one analysis, and emit the result"
)]
struct Args {
    /// Cleaning mode: remove-negatives or replace-negatives-with-zero
    #[arg(short, long, default_value = "remove-negatives")]
    cleaning: CleaningType,

    /// Analysis: mean, median, std-dev, p90-nearest-rank, top3-frequent-count-sum
    #[arg(short, long, default_value = "mean")]
    analysis: AnalysisType,

    /// Output destination: console or text-file
    #[arg(short, long, default_value = "console")]
    output: OutputMode,

    /// Override the file path used by text-file output
    #[arg(long)]
    out_path: Option<PathBuf>,

    /// Integer values to process
    #[arg(value_name = "INT", allow_negative_numbers = true, default_values_t = [5, -2, 7, 8])]
    data: Vec<i32>,
}

fn main() -> anyhow::Result<()> {
    // Pipeline output goes to stdout; keep tracing on stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let output = match args.out_path {
        Some(path) => OutputMode::TextFile(path),
        None => args.output,
    };
    tracing::debug!(
        cleaning = ?args.cleaning,
        analysis = ?args.analysis,
        ?output,
        n = args.data.len(),
        "starting pipeline"
    );

    let result = process(args.cleaning, args.analysis, &output, &args.data)?;
    println!("Returned = {}", format_value(result));

    Ok(())
}
