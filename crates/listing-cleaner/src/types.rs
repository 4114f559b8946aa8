//! Result and summary types produced by a cleaning run.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Output of [`ListingCleaner::clean`](crate::ListingCleaner::clean).
#[derive(Debug, Clone)]
pub struct CleaningResult {
    /// The cleaned dataset.
    pub data: DataFrame,
    /// What the run did to get there.
    pub summary: CleaningSummary,
}

/// Human-readable account of a cleaning run.
///
/// # Example
///
/// ```rust,ignore
/// let result = ListingCleaner::default().clean(&df)?;
/// let summary = &result.summary;
/// println!("Kept {} of {} rows in {}ms",
///     summary.rows_after, summary.rows_before, summary.duration_ms);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningSummary {
    /// Total execution time in milliseconds.
    pub duration_ms: u64,

    /// Number of rows before cleaning.
    pub rows_before: usize,
    /// Number of rows after cleaning.
    pub rows_after: usize,
    /// Number of rows removed during cleaning.
    pub rows_removed: usize,

    /// Number of columns before cleaning.
    pub columns_before: usize,
    /// Number of columns after cleaning.
    pub columns_after: usize,

    /// Median used to fill `price`, if any value was observed.
    pub price_median: Option<f64>,
    /// Median used to fill `rating`, if any value was observed.
    pub rating_median: Option<f64>,
    /// Number of `price` values imputed.
    pub prices_imputed: usize,
    /// Number of `rating` values imputed.
    pub ratings_imputed: usize,

    /// Rows removed for still holding a missing value after imputation.
    pub incomplete_rows_removed: usize,
    /// Rows removed as exact duplicates of an earlier row.
    pub duplicate_rows_removed: usize,
    /// Columns dropped unconditionally.
    pub dropped_columns: Vec<String>,

    /// Brands kept as-is, most frequent first.
    pub kept_brands: Vec<String>,
    /// Rows whose brand was relabeled to "Other".
    pub brands_collapsed: usize,

    /// Ordered audit trail of the steps taken.
    pub actions: Vec<CleaningAction>,
    /// Warnings raised during the run.
    pub warnings: Vec<String>,
}

impl CleaningSummary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action to the summary.
    pub fn add_action(&mut self, action: CleaningAction) {
        self.actions.push(action);
    }

    /// Add a warning to the summary.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Calculate the percentage of rows removed.
    pub fn rows_removed_percentage(&self) -> f32 {
        if self.rows_before == 0 {
            0.0
        } else {
            (self.rows_removed as f32 / self.rows_before as f32) * 100.0
        }
    }
}

/// A single action taken during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningAction {
    /// Type of action performed.
    pub action_type: ActionType,
    /// Target of the action (column name or "dataset").
    pub target: String,
    /// Human-readable description of the action.
    pub description: String,
}

impl CleaningAction {
    /// Create a new cleaning action.
    pub fn new(
        action_type: ActionType,
        target: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            action_type,
            target: target.into(),
            description: description.into(),
        }
    }
}

/// Types of actions that can be taken during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Missing values were imputed.
    ValueImputed,
    /// Rows with missing values were removed.
    RowsRemoved,
    /// Duplicate rows were removed.
    DuplicatesRemoved,
    /// A column was removed from the dataset.
    ColumnRemoved,
    /// Rare categorical values were merged into a catch-all value.
    CategoriesCollapsed,
    /// Rows were reordered.
    RowsSorted,
}
