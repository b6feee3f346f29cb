//! Approximation configuration
//!
//! The number of series terms is the accuracy/cost knob. It defaults to
//! [`DEFAULT_TERMS`] so that an unconfigured run reproduces the reference
//! value, and can be raised or lowered per run.
//!
//! # Example
//!
//! ```rust
//! use leibniz_core::{Precision, SeriesConfig};
//!
//! let config = SeriesConfig::from_toml("terms = 10000\nprecision = \"single\"").unwrap();
//! assert_eq!(config.terms, 10_000);
//! assert_eq!(config.precision, Precision::Single);
//!
//! let config = SeriesConfig::new().with_terms(3);
//! assert_eq!(config.precision, Precision::Double);
//! ```

use serde::{Deserialize, Serialize};

/// Number of series terms used when nothing else is configured
pub const DEFAULT_TERMS: u32 = 800;

/// Floating-point width used for the accumulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit `float` arithmetic, widened to f64 at the end
    Single,
    /// 64-bit arithmetic (reference behavior)
    #[default]
    Double,
}

/// Configuration for a single approximation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Number of series terms to sum
    pub terms: u32,

    /// Accumulation width
    pub precision: Precision,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            terms: DEFAULT_TERMS,
            precision: Precision::Double,
        }
    }
}

impl SeriesConfig {
    /// Create the default configuration (800 terms, double precision)
    pub fn new() -> Self {
        SeriesConfig::default()
    }

    /// Set the number of terms (builder pattern)
    pub fn with_terms(mut self, terms: u32) -> Self {
        self.terms = terms;
        self
    }

    /// Set the accumulation width (builder pattern)
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Parse configuration from a TOML string
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse series config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeriesConfig::default();
        assert_eq!(config.terms, 800);
        assert_eq!(config.precision, Precision::Double);
        assert_eq!(SeriesConfig::new(), config);
    }

    #[test]
    fn test_builder() {
        let config = SeriesConfig::new()
            .with_terms(42)
            .with_precision(Precision::Single);
        assert_eq!(config.terms, 42);
        assert_eq!(config.precision, Precision::Single);
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        let config = SeriesConfig::from_toml("").unwrap();
        assert_eq!(config, SeriesConfig::default());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = SeriesConfig::from_toml("terms = 5").unwrap();
        assert_eq!(config.terms, 5);
        assert_eq!(config.precision, Precision::Double);
    }

    #[test]
    fn test_from_toml_precision() {
        let config = SeriesConfig::from_toml(r#"precision = "single""#).unwrap();
        assert_eq!(config.terms, DEFAULT_TERMS);
        assert_eq!(config.precision, Precision::Single);
    }

    #[test]
    fn test_from_toml_rejects_unknown_key() {
        let err = SeriesConfig::from_toml("limit = 10").unwrap_err();
        assert!(err.contains("Failed to parse series config"), "{}", err);
    }

    #[test]
    fn test_from_toml_rejects_negative_terms() {
        assert!(SeriesConfig::from_toml("terms = -1").is_err());
    }

    #[test]
    fn test_from_toml_rejects_bad_precision() {
        assert!(SeriesConfig::from_toml(r#"precision = "quad""#).is_err());
    }
}
