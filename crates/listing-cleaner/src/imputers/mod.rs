//! Imputation strategies for filling missing values.

mod median;

pub use median::{MedianFill, MedianImputer};
