//! The listing cleaning transform.
//!
//! A fixed sequence of steps, each taking the previous step's frame and
//! returning a new one:
//! 1. Impute `price` with its median
//! 2. Impute `rating` with its median
//! 3. Drop rows still holding a missing value
//! 4. Drop duplicate rows (first occurrence kept)
//! 5. Drop the `image_url` and `product_url` columns
//! 6. Collapse brands outside the top N into "Other"
//! 7. Sort by `title` (stable)
//!
//! The caller's frame is never modified.

mod brands;
mod rows;

pub use brands::{BrandCollapse, OTHER_BRAND, collapse_rare_brands, rank_brands, top_brands};
pub use rows::{drop_duplicate_rows, drop_incomplete_rows};

use crate::config::CleanerConfig;
use crate::error::{Result, ResultExt};
use crate::imputers::{MedianFill, MedianImputer};
use crate::schema::{self, LINK_COLUMNS, PRICE, RATING, TITLE};
use crate::types::{ActionType, CleaningAction, CleaningResult, CleaningSummary};
use polars::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Clean a listing dataset, keeping the `top_n_brands` most frequent brands.
///
/// Shorthand for `ListingCleaner::new(CleanerConfig::new(top_n_brands))`
/// without the run summary.
pub fn clean(df: &DataFrame, top_n_brands: usize) -> Result<DataFrame> {
    ListingCleaner::new(CleanerConfig::new(top_n_brands))
        .clean(df)
        .map(|result| result.data)
}

/// Cleaner for product listing datasets.
#[derive(Debug, Clone, Default)]
pub struct ListingCleaner {
    config: CleanerConfig,
}

impl ListingCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Run the full cleaning transform over `df`.
    ///
    /// All required columns are checked before any work is done, so a
    /// malformed dataset fails with one [`MissingColumns`] error naming every
    /// absent column.
    ///
    /// [`MissingColumns`]: crate::CleaningError::MissingColumns
    pub fn clean(&self, df: &DataFrame) -> Result<CleaningResult> {
        let start_time = Instant::now();
        schema::validate_required_columns(df)?;

        info!(
            "Cleaning {} rows x {} columns (top {} brands)",
            df.height(),
            df.width(),
            self.config.top_n_brands
        );

        let mut summary = CleaningSummary::new();
        summary.rows_before = df.height();
        summary.columns_before = df.width();

        let (data, price_fill) = MedianImputer::fill(df, PRICE).context("Imputing price")?;
        record_fill(&mut summary, &price_fill);
        summary.price_median = price_fill.median;
        summary.prices_imputed = price_fill.imputed;

        let (data, rating_fill) = MedianImputer::fill(&data, RATING).context("Imputing rating")?;
        record_fill(&mut summary, &rating_fill);
        summary.rating_median = rating_fill.median;
        summary.ratings_imputed = rating_fill.imputed;

        let (data, incomplete) = drop_incomplete_rows(&data)?;
        summary.incomplete_rows_removed = incomplete;
        debug!("Removed {} incomplete rows", incomplete);
        if incomplete > 0 {
            summary.add_action(CleaningAction::new(
                ActionType::RowsRemoved,
                "dataset",
                format!("Removed {} rows with missing values", incomplete),
            ));
        }

        let (data, duplicates) = drop_duplicate_rows(&data)?;
        summary.duplicate_rows_removed = duplicates;
        debug!("Removed {} duplicate rows", duplicates);
        if duplicates > 0 {
            summary.add_action(CleaningAction::new(
                ActionType::DuplicatesRemoved,
                "dataset",
                format!("Removed {} duplicate rows", duplicates),
            ));
        }

        let data = schema::drop_link_columns(&data)?;
        for name in LINK_COLUMNS {
            summary.dropped_columns.push(name.to_string());
            summary.add_action(CleaningAction::new(
                ActionType::ColumnRemoved,
                name,
                "Dropped link column",
            ));
        }

        let (data, collapse) = collapse_rare_brands(&data, self.config.top_n_brands)?;
        debug!(
            "Kept {} brands, relabeled {} rows as '{}'",
            collapse.kept_brands.len(),
            collapse.rows_relabeled,
            OTHER_BRAND
        );
        if collapse.rows_relabeled > 0 {
            summary.add_action(CleaningAction::new(
                ActionType::CategoriesCollapsed,
                schema::BRAND,
                format!(
                    "Relabeled {} rows outside the top {} brands as '{}'",
                    collapse.rows_relabeled, self.config.top_n_brands, OTHER_BRAND
                ),
            ));
        }
        summary.kept_brands = collapse.kept_brands;
        summary.brands_collapsed = collapse.rows_relabeled;

        let data = sort_by_title(&data)?;
        summary.add_action(CleaningAction::new(
            ActionType::RowsSorted,
            TITLE,
            "Sorted rows by title",
        ));

        if data.height() == 0 && summary.rows_before > 0 {
            warn!("Cleaning removed every row");
            summary.add_warning("Cleaning removed every row");
        }

        summary.rows_after = data.height();
        summary.rows_removed = summary.rows_before - summary.rows_after;
        summary.columns_after = data.width();
        summary.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Cleaning complete: {} -> {} rows in {}ms",
            summary.rows_before, summary.rows_after, summary.duration_ms
        );

        Ok(CleaningResult { data, summary })
    }
}

/// Stable ascending sort on `title`.
pub fn sort_by_title(df: &DataFrame) -> Result<DataFrame> {
    let sorted = df.sort(
        [TITLE],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;
    Ok(sorted)
}

fn record_fill(summary: &mut CleaningSummary, fill: &MedianFill) {
    if fill.imputed == 0 {
        return;
    }
    // median is always present when something was imputed
    let median = fill.median.unwrap_or_default();
    debug!(
        "Filled {} values in '{}' with median {:.2}",
        fill.imputed, fill.column, median
    );
    summary.add_action(CleaningAction::new(
        ActionType::ValueImputed,
        fill.column.as_str(),
        format!("Filled {} missing values with median: {:.2}", fill.imputed, median),
    ));
}
