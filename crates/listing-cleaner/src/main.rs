//! CLI entry point for the listing cleaner.

use anyhow::{Result, anyhow};
use clap::Parser;
use listing_cleaner::{
    CleanerConfig, CleaningReport, CleaningSummary, DEFAULT_TOP_N_BRANDS, ListingCleaner,
    ReportWriter,
};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Clean a product listings CSV for analysis",
    long_about = "Imputes missing price/rating with the median, drops incomplete and \
                  duplicate rows, removes link columns, collapses rare brands into \
                  \"Other\" and sorts by title.\n\n\
                  EXAMPLES:\n  \
                  # Clean with the default 25 brands\n  \
                  listing-cleaner -i listings.csv\n\n  \
                  # Keep 10 brands and write a JSON report next to the CSV\n  \
                  listing-cleaner -i listings.csv -n 10 -o results/ --emit-report\n\n  \
                  # Print the run report to stdout\n  \
                  listing-cleaner -i listings.csv --json | jq .summary.rows_after"
)]
struct Args {
    /// Path to the CSV file to clean
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for results
    #[arg(short, long, default_value = "./outputs")]
    output: PathBuf,

    /// Custom output file name (without extension)
    ///
    /// If not specified, uses "<input_name>_cleaned"
    #[arg(long)]
    output_name: Option<String>,

    /// Number of most frequent brands kept; the rest become "Other"
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N_BRANDS)]
    top_n_brands: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run report as JSON to stdout instead of a summary
    ///
    /// Disables all logs so stdout only carries the JSON.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <output_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is disabled so stdout only contains
/// the JSON report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !args.input.exists() {
        return Err(anyhow!("Input file not found: {}", args.input.display()));
    }

    info!("Loading dataset from: {}", args.input.display());
    let data = load_csv(&args.input)?;
    info!("Dataset loaded successfully: {:?}", data.shape());

    let config = CleanerConfig::new(args.top_n_brands);
    let mut result = ListingCleaner::new(config).clean(&data)?;

    let output_name = args
        .output_name
        .clone()
        .unwrap_or_else(|| format!("{}_cleaned", file_stem(&args.input)));
    let writer = ReportWriter::new(&args.output, output_name);
    let csv_path = writer.write_dataset(&mut result.data)?;

    let report = CleaningReport::new(
        &args.input,
        Some(csv_path.as_path()),
        config,
        result.summary,
    );

    if args.emit_report {
        writer.write_report(&report)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !args.quiet {
        print_summary(&report.summary, &csv_path);
    }

    Ok(())
}

fn load_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string())
}

/// Print a human-readable summary.
///
/// Uses `println!` on purpose: this is the command's output, not a log line.
fn print_summary(summary: &CleaningSummary, csv_path: &Path) {
    println!("{}", "=".repeat(60));
    println!("CLEANING SUMMARY");
    println!("{}", "=".repeat(60));
    println!(
        "  Rows: {} -> {} ({:.1}% removed)",
        summary.rows_before,
        summary.rows_after,
        summary.rows_removed_percentage()
    );
    println!(
        "  Columns: {} -> {}",
        summary.columns_before, summary.columns_after
    );
    if let Some(median) = summary.price_median {
        println!(
            "  price: {} imputed (median {:.2})",
            summary.prices_imputed, median
        );
    }
    if let Some(median) = summary.rating_median {
        println!(
            "  rating: {} imputed (median {:.2})",
            summary.ratings_imputed, median
        );
    }
    println!(
        "  Removed {} incomplete and {} duplicate rows",
        summary.incomplete_rows_removed, summary.duplicate_rows_removed
    );
    println!(
        "  Brands kept: {}, rows relabeled as \"Other\": {}",
        summary.kept_brands.len(),
        summary.brands_collapsed
    );
    for warning in &summary.warnings {
        println!("  Warning: {}", warning);
    }
    println!("  Duration: {}ms", summary.duration_ms);
    println!("  Output: {}", csv_path.display());
    println!("{}", "=".repeat(60));
}
