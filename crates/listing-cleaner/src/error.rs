//! Error types for the listing cleaner.
//!
//! Every failure of the cleaning transform is a data-contract violation by the
//! caller, so errors are surfaced unmodified: there is no retry and no default
//! substitution.
//!
//! Errors serialize as `{ code, message }` so they can be embedded in JSON
//! reports next to a run summary.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the cleaning transform.
#[derive(Error, Debug)]
pub enum CleaningError {
    /// One or more required columns are absent from the dataset.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A numeric column that must be imputed has no observed values.
    #[error("Column '{0}' has no non-null values; median is undefined")]
    EmptyColumn(String),

    /// A column expected to be numeric holds another data type.
    #[error("Column '{column}' must be numeric, found {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CleaningError>,
    },
}

impl CleaningError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CleaningError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, preserved through context wrappers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumns(_) => "MISSING_COLUMN",
            Self::EmptyColumn(_) => "EMPTY_COLUMN",
            Self::NonNumericColumn { .. } => "NON_NUMERIC_COLUMN",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error was caused by the shape or content of the input data.
    pub fn is_data_contract_violation(&self) -> bool {
        match self {
            Self::MissingColumns(_) | Self::EmptyColumn(_) | Self::NonNumericColumn { .. } => {
                true
            }
            Self::WithContext { source, .. } => source.is_data_contract_violation(),
            _ => false,
        }
    }
}

impl Serialize for CleaningError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CleaningError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleaningError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CleaningError::Polars(e).with_context(context))
    }
}
