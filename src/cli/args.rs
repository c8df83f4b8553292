//! Command-line argument parsing for healthcalc
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// healthcalc - Body Mass Index calculator
#[derive(Parser, Debug)]
#[command(name = "healthcalc")]
#[command(version)]
#[command(about = "Compute and classify Body Mass Index", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Compute BMI from weight and height, then classify it
    Bmi {
        /// Weight in kilograms
        #[arg(short, long)]
        weight: f64,

        /// Height in meters
        #[arg(long)]
        height: f64,
    },

    /// Classify an existing BMI value
    Classify {
        /// BMI in kg/m²
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
    },

    /// Display current configuration
    Config {
        /// Write the effective configuration to the config path
        #[arg(long)]
        write: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter directive when RUST_LOG is unset
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}
