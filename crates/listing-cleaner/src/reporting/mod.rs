//! Report and dataset output.
//!
//! [`CleaningReport`] wraps a [`CleaningSummary`](crate::CleaningSummary) with
//! run metadata. It backs both the CLI's `--json` stdout output and the
//! `--emit-report` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use listing_cleaner::reporting::{CleaningReport, ReportWriter};
//!
//! let writer = ReportWriter::new("output", "listings_cleaned");
//! let csv_path = writer.write_dataset(&mut result.data)?;
//! let report = CleaningReport::new("listings.csv", Some(&csv_path), config, result.summary);
//! writer.write_report(&report)?;
//! ```

mod writer;

pub use writer::{CleaningReport, ReportWriter};
