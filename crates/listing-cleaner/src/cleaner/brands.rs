//! Rare-brand collapsing.
//!
//! Brands are ranked by frequency; ties are broken by first occurrence in the
//! current row order, so the ranking is fully deterministic.

use crate::error::Result;
use crate::schema::BRAND;
use crate::utils::string_values;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Catch-all label for brands outside the top N.
pub const OTHER_BRAND: &str = "Other";

/// Outcome of collapsing rare brands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandCollapse {
    /// Brands kept as-is, most frequent first.
    pub kept_brands: Vec<String>,
    /// Number of rows relabeled to [`OTHER_BRAND`].
    pub rows_relabeled: usize,
}

/// Distinct brand values with their counts, most frequent first.
///
/// Equal counts are ordered by first occurrence. Nulls are not counted.
pub fn rank_brands(series: &Series) -> Result<Vec<(String, usize)>> {
    // brand -> (count, first seen position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, value) in string_values(series)?.into_iter().enumerate() {
        if let Some(brand) = value {
            counts.entry(brand).or_insert((0, position)).0 += 1;
        }
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(brand, (count, first_seen))| (brand, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(ranked
        .into_iter()
        .map(|(brand, count, _)| (brand, count))
        .collect())
}

/// The `n` most frequent brands, most frequent first.
pub fn top_brands(series: &Series, n: usize) -> Result<Vec<String>> {
    Ok(rank_brands(series)?
        .into_iter()
        .take(n)
        .map(|(brand, _)| brand)
        .collect())
}

/// Return a copy of `df` where every brand outside the `top_n` most frequent
/// is replaced by [`OTHER_BRAND`].
///
/// The `brand` column is rewritten as a `String` column.
pub fn collapse_rare_brands(df: &DataFrame, top_n: usize) -> Result<(DataFrame, BrandCollapse)> {
    let series = df.column(BRAND)?.as_materialized_series();
    let kept_brands = top_brands(series, top_n)?;
    let keep: HashSet<&str> = kept_brands.iter().map(String::as_str).collect();

    let mut rows_relabeled = 0;
    let collapsed: Vec<String> = string_values(series)?
        .into_iter()
        .map(|value| match value {
            Some(brand) if keep.contains(brand.as_str()) => brand,
            _ => {
                rows_relabeled += 1;
                OTHER_BRAND.to_string()
            }
        })
        .collect();

    let mut out = df.clone();
    out.replace(BRAND, Series::new(BRAND.into(), collapsed))?;

    Ok((
        out,
        BrandCollapse {
            kept_brands,
            rows_relabeled,
        },
    ))
}
