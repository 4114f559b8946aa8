use crate::config::CleanerConfig;
use crate::error::Result;
use crate::types::CleaningSummary;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run report: metadata plus the cleaning summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// Path to the output file (if written)
    pub output_file: Option<String>,
    /// Configuration the run used
    pub config: CleanerConfig,
    /// What the run did
    pub summary: CleaningSummary,
}

impl CleaningReport {
    pub fn new(
        input_file: impl AsRef<Path>,
        output_file: Option<&Path>,
        config: CleanerConfig,
        summary: CleaningSummary,
    ) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.as_ref().display().to_string(),
            output_file: output_file.map(|p| p.display().to_string()),
            config,
            summary,
        }
    }
}

/// Writes cleaned datasets and reports into an output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    output_name: String,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>, output_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_name: output_name.into(),
        }
    }

    /// Write `df` as `<output_name>.csv` and return its path.
    pub fn write_dataset(&self, df: &mut DataFrame) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let output_path = self.output_dir.join(format!("{}.csv", self.output_name));
        let mut file = File::create(&output_path)?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(df)?;

        info!("Dataset saved: {}", output_path.display());
        Ok(output_path)
    }

    /// Write `report` as `<output_name>_report.json` and return its path.
    pub fn write_report(&self, report: &CleaningReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", self.output_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());
        Ok(report_path)
    }
}
