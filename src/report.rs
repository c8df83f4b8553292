//! Assessment record printed by the CLI

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::BmiCategory;

/// BMI computed from a weight/height pair, with its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    /// BMI rounded for display; the stored value stays exact
    pub fn rounded_bmi(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.bmi)
    }

    /// Plain one-line rendering
    pub fn to_text(&self, precision: usize) -> String {
        format!("BMI {} ({})", self.rounded_bmi(precision), self.category)
    }

    /// Colored rendering for terminals
    pub fn to_colored_text(&self, precision: usize) -> String {
        let label = match self.category {
            BmiCategory::NormalWeight => self.category.label().green(),
            BmiCategory::Underweight | BmiCategory::Overweight => self.category.label().yellow(),
            BmiCategory::Obesity => self.category.label().red(),
        };
        format!("BMI {} ({})", self.rounded_bmi(precision).bold(), label)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
