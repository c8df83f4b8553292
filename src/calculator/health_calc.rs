//! Stateless health calculator implementation

use tracing::debug;

use crate::calculator::{HealthCalc, MeasurementValidator};
use crate::errors::Result;
use crate::report::BmiReport;
use crate::types::{BmiCategory, HealthLimits};

/// Calculator for BMI and its classification
///
/// Holds only its limits; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthCalculator {
    validator: MeasurementValidator,
}

impl HealthCalculator {
    /// Create calculator with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create calculator with custom limits
    pub fn with_limits(limits: HealthLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            validator: MeasurementValidator::new(limits),
        })
    }

    pub fn limits(&self) -> &HealthLimits {
        self.validator.limits()
    }

    /// Typed category for `bmi`
    pub fn bmi_category(&self, bmi: f64) -> Result<BmiCategory> {
        self.validator.check_bmi(bmi)?;
        let category = BmiCategory::from_bmi(bmi);
        debug!(bmi, category = %category, "classified bmi");
        Ok(category)
    }

    /// Compute the BMI for a weight/height pair and classify it
    pub fn assess(&self, weight: f64, height: f64) -> Result<BmiReport> {
        let bmi = self.body_mass_index(weight, height)?;
        let category = self.bmi_category(bmi)?;
        Ok(BmiReport {
            weight,
            height,
            bmi,
            category,
        })
    }
}

impl HealthCalc for HealthCalculator {
    fn body_mass_index(&self, weight: f64, height: f64) -> Result<f64> {
        self.validator.check_body(weight, height)?;
        let bmi = weight / (height * height);
        debug!(weight, height, bmi, "computed bmi");
        Ok(bmi)
    }

    fn bmi_classification(&self, bmi: f64) -> Result<&'static str> {
        self.bmi_category(bmi).map(|category| category.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HealthError;
    use crate::types::{Metric, Range};

    #[test]
    fn test_body_mass_index_standard() {
        let calc = HealthCalculator::new();
        let bmi = calc.body_mass_index(70.0, 1.75).unwrap();
        assert!((bmi - 22.857).abs() < 0.01);
    }

    #[test]
    fn test_body_mass_index_not_rounded() {
        let calc = HealthCalculator::new();
        let bmi = calc.body_mass_index(70.0, 1.75).unwrap();
        assert_eq!(bmi, 70.0 / (1.75 * 1.75));
    }

    #[test]
    fn test_classification_labels() {
        let calc = HealthCalculator::new();
        assert_eq!(calc.bmi_classification(18.49).unwrap(), "Underweight");
        assert_eq!(calc.bmi_classification(18.5).unwrap(), "Normal weight");
        assert_eq!(calc.bmi_classification(29.99).unwrap(), "Overweight");
        assert_eq!(calc.bmi_classification(30.0).unwrap(), "Obesity");
    }

    #[test]
    fn test_assess_combines_both_operations() {
        let calc = HealthCalculator::new();
        let report = calc.assess(70.0, 1.75).unwrap();
        assert_eq!(report.category, BmiCategory::NormalWeight);
        assert_eq!(report.weight, 70.0);
        assert_eq!(report.height, 1.75);
    }

    #[test]
    fn test_assess_rejects_bmi_outside_classification_range() {
        // 700 kg at 0.30 m gives a BMI far beyond 150
        let calc = HealthCalculator::new();
        let err = calc.assess(700.0, 0.30).unwrap_err();
        assert_eq!(err.metric(), Some(Metric::Bmi));
    }

    #[test]
    fn test_with_limits_applies_custom_range() {
        let limits = HealthLimits {
            weight: Range::new(2.0, 300.0),
            ..HealthLimits::default()
        };
        let calc = HealthCalculator::with_limits(limits).unwrap();
        assert!(calc.body_mass_index(1.5, 1.0).is_err());
        assert!(calc.body_mass_index(2.0, 1.0).is_ok());
        assert_eq!(calc.limits().weight.max, 300.0);
    }

    #[test]
    fn test_with_limits_rejects_invalid_limits() {
        let limits = HealthLimits {
            bmi: Range::new(-5.0, 150.0),
            ..HealthLimits::default()
        };
        let err = HealthCalculator::with_limits(limits).unwrap_err();
        assert!(matches!(err, HealthError::Config(_)));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let calc: Box<dyn HealthCalc> = Box::new(HealthCalculator::new());
        assert_eq!(calc.bmi_classification(22.0).unwrap(), "Normal weight");
    }
}
