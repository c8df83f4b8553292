//! BMI classification bands

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight category for a BMI value
///
/// Each band includes its lower bound: 18.5 is `NormalWeight`,
/// 25.0 is `Overweight`, 30.0 is `Obesity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    pub const NORMAL_WEIGHT_FROM: f64 = 18.5;
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    pub const OBESITY_FROM: f64 = 30.0;

    /// Band for an already-validated BMI
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::NORMAL_WEIGHT_FROM {
            BmiCategory::Underweight
        } else if bmi < Self::OVERWEIGHT_FROM {
            BmiCategory::NormalWeight
        } else if bmi < Self::OBESITY_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
