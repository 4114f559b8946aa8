//! Fixed column schema of a product listing dataset.

use crate::error::{CleaningError, Result};
use polars::prelude::*;

pub const PRICE: &str = "price";
pub const RATING: &str = "rating";
pub const BRAND: &str = "brand";
pub const TITLE: &str = "title";
pub const IMAGE_URL: &str = "image_url";
pub const PRODUCT_URL: &str = "product_url";

/// Columns the cleaner reads or drops. Validated together at entry.
pub const REQUIRED_COLUMNS: [&str; 6] = [PRICE, RATING, BRAND, TITLE, IMAGE_URL, PRODUCT_URL];

/// Link columns carry no analytical value and are always removed.
pub const LINK_COLUMNS: [&str; 2] = [IMAGE_URL, PRODUCT_URL];

/// Check that every required column is present.
///
/// All absent columns are reported in a single
/// [`CleaningError::MissingColumns`], in declaration order.
pub fn validate_required_columns(df: &DataFrame) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| df.get_column_index(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CleaningError::MissingColumns(missing))
    }
}

/// Remove the link columns. Fails if either is absent.
pub fn drop_link_columns(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in LINK_COLUMNS {
        if out.get_column_index(name).is_none() {
            return Err(CleaningError::MissingColumns(vec![name.to_string()]));
        }
        out = out.drop(name)?;
    }
    Ok(out)
}
