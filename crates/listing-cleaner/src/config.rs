//! Configuration for the listing cleaner.

use serde::{Deserialize, Serialize};

/// Number of brands kept by default before the rest collapse into `"Other"`.
pub const DEFAULT_TOP_N_BRANDS: usize = 25;

/// Configuration for [`ListingCleaner`](crate::ListingCleaner).
///
/// The transform itself is fixed; the only tunable is how many distinct
/// brands survive the rare-brand collapse.
///
/// # Example
///
/// ```rust,ignore
/// use listing_cleaner::CleanerConfig;
///
/// let config: CleanerConfig = serde_json::from_str(r#"{ "top_n_brands": 10 }"#)?;
/// assert_eq!(config.top_n_brands, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Number of most frequent brands kept as-is.
    /// Default: 25
    pub top_n_brands: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            top_n_brands: DEFAULT_TOP_N_BRANDS,
        }
    }
}

impl CleanerConfig {
    /// Create a configuration keeping the `top_n_brands` most frequent brands.
    pub fn new(top_n_brands: usize) -> Self {
        Self { top_n_brands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanerConfig::default();
        assert_eq!(config.top_n_brands, 25);
    }

    #[test]
    fn test_config_serialization() {
        let config = CleanerConfig::new(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CleanerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_from_empty_json_uses_default() {
        let config: CleanerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.top_n_brands, DEFAULT_TOP_N_BRANDS);
    }

    #[test]
    fn test_config_rejects_negative() {
        let result: std::result::Result<CleanerConfig, _> =
            serde_json::from_str(r#"{ "top_n_brands": -1 }"#);
        assert!(result.is_err());
    }
}
