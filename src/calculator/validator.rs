//! Measurement validator
//! Rejects non-physical and out-of-range input before any arithmetic

use tracing::warn;

use crate::errors::{HealthError, Result};
use crate::types::{HealthLimits, Metric};

/// Input validator bound to a set of limits
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementValidator {
    limits: HealthLimits,
}

impl MeasurementValidator {
    pub fn new(limits: HealthLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &HealthLimits {
        &self.limits
    }

    /// Validate a weight/height pair.
    ///
    /// Order: weight ≤ 0, height ≤ 0, weight range, height range. The first
    /// violation wins.
    pub fn check_body(&self, weight: f64, height: f64) -> Result<()> {
        let outcome = Self::check_physical(Metric::Weight, weight)
            .and_then(|_| Self::check_physical(Metric::Height, height))
            .and_then(|_| self.limits.check(Metric::Weight, weight))
            .and_then(|_| self.limits.check(Metric::Height, height))
            .map(|_| ());
        Self::trace_rejection(outcome)
    }

    /// Validate a BMI supplied for classification
    pub fn check_bmi(&self, bmi: f64) -> Result<()> {
        let outcome = Self::check_finite(Metric::Bmi, bmi)
            .and_then(|_| self.limits.check(Metric::Bmi, bmi))
            .map(|_| ());
        Self::trace_rejection(outcome)
    }

    fn check_finite(metric: Metric, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(HealthError::invalid(metric, value, "not a finite number"))
        }
    }

    fn check_physical(metric: Metric, value: f64) -> Result<f64> {
        let value = Self::check_finite(metric, value)?;
        if value <= 0.0 {
            return Err(HealthError::invalid(metric, value, "must be positive"));
        }
        Ok(value)
    }

    fn trace_rejection(outcome: Result<()>) -> Result<()> {
        if let Err(err) = &outcome {
            warn!(error = %err, "rejected measurement");
        }
        outcome
    }
}
