//! Error types for healthcalc
//!
//! A single domain error, `InvalidHealthData`, covers every rejected
//! measurement. The remaining variants belong to configuration loading.

use thiserror::Error;

use crate::types::Metric;

/// Main error type for the calculator and its configuration
#[derive(Error, Debug)]
pub enum HealthError {
    /// Measurement outside its physical or numeric bounds
    #[error("Invalid health data: {metric} = {value} {unit} ({reason})", unit = .metric.unit())]
    InvalidHealthData {
        metric: Metric,
        value: f64,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Wrapped errors leave their detail to `source()`
    /// TOML parse errors
    #[error("Config parse error")]
    Toml(#[from] toml::de::Error),

    /// Serialization errors
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl HealthError {
    pub(crate) fn invalid(metric: Metric, value: f64, reason: impl Into<String>) -> Self {
        HealthError::InvalidHealthData {
            metric,
            value,
            reason: reason.into(),
        }
    }

    /// True for the domain error raised on rejected measurements
    pub fn is_invalid_health_data(&self) -> bool {
        matches!(self, HealthError::InvalidHealthData { .. })
    }

    /// Metric that failed validation, if this is a data error
    pub fn metric(&self) -> Option<Metric> {
        match self {
            HealthError::InvalidHealthData { metric, .. } => Some(*metric),
            _ => None,
        }
    }
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, HealthError>;
