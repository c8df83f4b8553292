//! Measured quantities and their valid ranges

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{HealthError, Result};

/// Quantity accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Body weight in kilograms
    Weight,

    /// Body height in meters
    Height,

    /// Body Mass Index in kg/m²
    Bmi,
}

impl Metric {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::Height => "height",
            Metric::Bmi => "bmi",
        }
    }

    /// Unit the value is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Weight => "kg",
            Metric::Height => "m",
            Metric::Bmi => "kg/m²",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject `value` with a reason naming the violated bound
    pub fn check(&self, metric: Metric, value: f64) -> Result<f64> {
        if self.contains(value) {
            return Ok(value);
        }
        let reason = if value > self.max {
            format!("above maximum {} {}", self.max, metric.unit())
        } else {
            format!("below minimum {} {}", self.min, metric.unit())
        };
        Err(HealthError::invalid(metric, value, reason))
    }

    fn validate(&self, metric: Metric) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(HealthError::Config(format!(
                "{} limits must be finite",
                metric
            )));
        }
        if self.min > self.max {
            return Err(HealthError::Config(format!(
                "{} minimum {} exceeds maximum {}",
                metric, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Accepted ranges for every metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthLimits {
    pub weight: Range,
    pub height: Range,
    pub bmi: Range,
}

impl HealthLimits {
    pub const DEFAULT_WEIGHT: Range = Range::new(1.0, 700.0);
    pub const DEFAULT_HEIGHT: Range = Range::new(0.30, 3.00);
    pub const DEFAULT_BMI: Range = Range::new(0.0, 150.0);

    /// Range configured for `metric`
    pub fn range(&self, metric: Metric) -> Range {
        match metric {
            Metric::Weight => self.weight,
            Metric::Height => self.height,
            Metric::Bmi => self.bmi,
        }
    }

    /// Check `value` against the range configured for `metric`
    pub fn check(&self, metric: Metric, value: f64) -> Result<f64> {
        self.range(metric).check(metric, value)
    }

    /// Check that the limits describe physically meaningful bounds
    pub fn validate(&self) -> Result<()> {
        self.weight.validate(Metric::Weight)?;
        self.height.validate(Metric::Height)?;
        self.bmi.validate(Metric::Bmi)?;

        // weight / height² must stay defined
        if self.weight.min <= 0.0 {
            return Err(HealthError::Config(
                "weight minimum must be positive".to_string(),
            ));
        }
        if self.height.min <= 0.0 {
            return Err(HealthError::Config(
                "height minimum must be positive".to_string(),
            ));
        }
        if self.bmi.min < 0.0 {
            return Err(HealthError::Config(
                "bmi minimum must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HealthLimits {
    fn default() -> Self {
        Self {
            weight: Self::DEFAULT_WEIGHT,
            height: Self::DEFAULT_HEIGHT,
            bmi: Self::DEFAULT_BMI,
        }
    }
}
