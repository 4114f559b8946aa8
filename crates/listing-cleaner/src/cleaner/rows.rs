//! Row-level cleaning steps.

use crate::error::Result;
use crate::utils::missing_mask;
use polars::prelude::*;

/// Remove every row holding a missing value in any column.
///
/// Returns the filtered frame and the number of rows removed.
pub fn drop_incomplete_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let mut keep = vec![true; df.height()];

    for col in df.get_columns() {
        let missing = missing_mask(col.as_materialized_series())?;
        for (keep_row, is_missing) in keep.iter_mut().zip(missing) {
            if is_missing {
                *keep_row = false;
            }
        }
    }

    let mask = BooleanChunked::new("keep".into(), &keep);
    let out = df.filter(&mask)?;
    let removed = df.height() - out.height();
    Ok((out, removed))
}

/// Remove rows that repeat an earlier row across all columns.
///
/// The first occurrence is kept and row order is preserved.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let out = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    let removed = df.height() - out.height();
    Ok((out, removed))
}
