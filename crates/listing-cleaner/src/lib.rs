//! Product Listing Cleaner
//!
//! Turns a raw table of product listings into an analysis-ready copy, built
//! on Polars.
//!
//! # Overview
//!
//! The transform runs a fixed sequence of steps:
//!
//! - **Median imputation**: missing `price` and `rating` values are filled
//!   with the median of the observed values
//! - **Incomplete rows**: any row still holding a missing value is dropped
//! - **Duplicates**: exact duplicate rows are dropped, first occurrence kept
//! - **Link columns**: `image_url` and `product_url` are removed
//! - **Brand collapsing**: brands outside the N most frequent become `"Other"`
//! - **Ordering**: rows are sorted by `title`
//!
//! The input frame is never modified.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use listing_cleaner::{CleanerConfig, ListingCleaner};
//! use polars::prelude::*;
//!
//! let df = CsvReadOptions::default()
//!     .with_has_header(true)
//!     .try_into_reader_with_file_path(Some("listings.csv".into()))?
//!     .finish()?;
//!
//! // Option 1: just the cleaned frame
//! let cleaned = listing_cleaner::clean(&df, 25)?;
//!
//! // Option 2: cleaned frame plus a summary of what was done
//! let result = ListingCleaner::new(CleanerConfig::new(10)).clean(&df)?;
//! println!("Kept {} brands", result.summary.kept_brands.len());
//! ```
//!
//! # Errors
//!
//! Missing required columns are reported together in one
//! [`CleaningError::MissingColumns`]. A `price` or `rating` column with no
//! observed values fails with [`CleaningError::EmptyColumn`] instead of
//! silently dropping every row.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod imputers;
pub mod reporting;
pub mod schema;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{BrandCollapse, ListingCleaner, OTHER_BRAND, clean};
pub use config::{CleanerConfig, DEFAULT_TOP_N_BRANDS};
pub use error::{CleaningError, ResultExt};
pub use imputers::{MedianFill, MedianImputer};
pub use reporting::{CleaningReport, ReportWriter};
pub use types::{ActionType, CleaningAction, CleaningResult, CleaningSummary};
