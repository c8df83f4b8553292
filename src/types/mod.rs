//! Type definitions module
//!
//! Measurement and category types shared by the calculator, the report
//! and the CLI.

pub mod metric;
pub mod category;

// Re-export commonly used types
pub use metric::{HealthLimits, Metric, Range};
pub use category::BmiCategory;
