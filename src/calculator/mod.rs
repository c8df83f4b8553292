//! Health calculator
//!
//! [`HealthCalc`] declares the two operations; [`HealthCalculator`] is the
//! stateless implementation backed by a [`MeasurementValidator`].

pub mod validator;
pub mod health_calc;

pub use health_calc::HealthCalculator;
pub use validator::MeasurementValidator;

use crate::errors::Result;

/// Body Mass Index operations
pub trait HealthCalc {
    /// BMI for `weight` (kg) and `height` (m), unrounded
    fn body_mass_index(&self, weight: f64, height: f64) -> Result<f64>;

    /// Category label for `bmi`
    fn bmi_classification(&self, bmi: f64) -> Result<&'static str>;
}
