//! CLI module for healthcalc
//!
//! Handles command-line argument parsing and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Args, Commands, Verbosity};
pub use commands::run;
