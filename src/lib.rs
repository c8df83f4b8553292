//! healthcalc - Body Mass Index calculator
//!
//! Computes BMI from weight (kg) and height (m) and classifies a BMI into
//! one of four bands. Every rejected measurement surfaces as
//! [`HealthError::InvalidHealthData`].
//!
//! ```
//! use healthcalc::{HealthCalc, HealthCalculator};
//!
//! let calc = HealthCalculator::new();
//! let bmi = calc.body_mass_index(70.0, 1.75).unwrap();
//! assert_eq!(calc.bmi_classification(bmi).unwrap(), "Normal weight");
//! ```

pub mod errors;
pub mod types;
pub mod calculator;
pub mod report;

// Re-export commonly used types
pub use errors::{HealthError, Result};
pub use calculator::{HealthCalc, HealthCalculator};
pub use report::BmiReport;
pub use types::{BmiCategory, HealthLimits, Metric, Range};

// Binary support
pub mod cli;
pub mod config;
pub mod logging;
