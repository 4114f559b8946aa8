//! Shared utilities for the cleaning steps.

use polars::prelude::*;

/// Check if a DataType is numeric (integer, float or decimal).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Int128
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal(_, _)
    )
}

/// Check if a DataType is floating point, i.e. may hold `NaN`.
#[inline]
pub fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Per-row missing flags for a series.
///
/// A value is missing when it is null, or `NaN` in a float column.
pub fn missing_mask(series: &Series) -> PolarsResult<Vec<bool>> {
    if is_float_dtype(series.dtype()) {
        let floats = series.cast(&DataType::Float64)?;
        Ok(floats
            .f64()?
            .into_iter()
            .map(|v| v.is_none_or(f64::is_nan))
            .collect())
    } else {
        Ok(series
            .is_null()
            .into_iter()
            .map(|v| v.unwrap_or(false))
            .collect())
    }
}

/// Render a brand series as owned optional strings.
///
/// Non-string columns (e.g. categoricals) are cast to `String` first.
pub fn string_values(series: &Series) -> PolarsResult<Vec<Option<String>>> {
    let strings = series.cast(&DataType::String)?;
    Ok(strings
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(is_numeric_dtype(&DataType::Int128));
        assert!(is_numeric_dtype(&DataType::Decimal(Some(10), Some(2))));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_missing_mask_float_treats_nan_as_missing() {
        let series = Series::new("v".into(), [Some(1.0), None, Some(f64::NAN)]);
        assert_eq!(missing_mask(&series).unwrap(), vec![false, true, true]);
    }

    #[test]
    fn test_missing_mask_string() {
        let series = Series::new("s".into(), [Some("a"), None, Some("")]);
        assert_eq!(missing_mask(&series).unwrap(), vec![false, true, false]);
    }

    #[test]
    fn test_string_values_casts_integers() {
        let series = Series::new("b".into(), [Some(1i64), None]);
        assert_eq!(
            string_values(&series).unwrap(),
            vec![Some("1".to_string()), None]
        );
    }
}
