//! Median imputation for nullable numeric columns.

use crate::error::{CleaningError, Result, ResultExt};
use crate::utils::is_numeric_dtype;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of filling one column with its median.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianFill {
    /// Name of the imputed column.
    pub column: String,
    /// Median of the observed values, `None` if the column had none.
    pub median: Option<f64>,
    /// Number of values replaced by the median.
    pub imputed: usize,
}

/// Replaces missing numeric values with the median of the observed ones.
pub struct MedianImputer;

impl MedianImputer {
    /// Median of the non-missing values of a numeric series.
    ///
    /// Nulls and `NaN` are ignored. An even number of observed values yields
    /// the mean of the two middle values. Returns `None` when nothing is observed.
    pub fn median(series: &Series) -> Result<Option<f64>> {
        let observed = Self::observed_values(series)?;
        Ok(observed.median())
    }

    /// Return a copy of `df` with `col_name` cast to `Float64` and every
    /// missing value replaced by the column median.
    ///
    /// Fails with [`CleaningError::EmptyColumn`] if the column has missing
    /// values but no observed values to take a median from.
    pub fn fill(df: &DataFrame, col_name: &str) -> Result<(DataFrame, MedianFill)> {
        let series = df
            .column(col_name)
            .context(format!("Reading column '{}'", col_name))?
            .as_materialized_series();
        let observed = Self::observed_values(series)?;
        let median = observed.median();
        let missing = observed.null_count();

        let fill_value = match median {
            Some(value) => value,
            None if missing > 0 => return Err(CleaningError::EmptyColumn(col_name.to_string())),
            // Zero rows: nothing to fill
            None => f64::NAN,
        };

        let filled: Vec<f64> = observed
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(fill_value))
            .collect();

        let mut out = df.clone();
        out.replace(col_name, Series::new(col_name.into(), filled))?;

        Ok((
            out,
            MedianFill {
                column: col_name.to_string(),
                median,
                imputed: missing,
            },
        ))
    }

    /// Cast to `Float64` and turn `NaN` into null so both count as missing.
    ///
    /// An entirely null column is accepted whatever its dtype, since CSV
    /// readers infer `String` for a column without a single value.
    fn observed_values(series: &Series) -> Result<Series> {
        if !is_numeric_dtype(series.dtype()) && series.null_count() != series.len() {
            return Err(CleaningError::NonNumericColumn {
                column: series.name().to_string(),
                dtype: series.dtype().to_string(),
            });
        }

        let floats = series.cast(&DataType::Float64)?;
        let values: Vec<Option<f64>> = floats
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();

        Ok(Series::new(series.name().clone(), values))
    }
}
