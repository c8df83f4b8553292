//! Subcommand execution
//!
//! Output goes to a caller-supplied writer so the binary and the tests
//! share one code path.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::calculator::{HealthCalc, HealthCalculator};
use crate::cli::{Args, Commands};
use crate::config::Config;

/// Execute the parsed command against `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = match (&args.command, args.config.as_deref()) {
        // --write may target a file that does not exist yet
        (Commands::Config { write: true }, Some(path)) => Config::load_or_default(path),
        (_, path) => Config::load(path),
    }
    .context("Failed to load configuration")?;
    let calculator = HealthCalculator::with_limits(config.limits)?;

    let json = args.json || config.output.json;
    let color = config.output.color && !args.no_color;
    let precision = config.output.precision;

    match &args.command {
        Commands::Bmi { weight, height } => {
            let report = calculator.assess(*weight, *height)?;
            info!(bmi = report.bmi, category = %report.category, "assessment complete");
            if json {
                writeln!(out, "{}", report.to_json()?)?;
            } else if color {
                writeln!(out, "{}", report.to_colored_text(precision))?;
            } else {
                writeln!(out, "{}", report.to_text(precision))?;
            }
        }
        Commands::Classify { bmi } => {
            let label = calculator.bmi_classification(*bmi)?;
            if json {
                let value = serde_json::json!({ "bmi": bmi, "category": label });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                writeln!(out, "{}", label)?;
            }
        }
        Commands::Config { write } => {
            if *write {
                let path = match &args.config {
                    Some(path) => path.clone(),
                    None => Config::default_path().context("Could not determine home directory")?,
                };
                config.save(&path).context("Failed to write config file")?;
                info!(path = %path.display(), "configuration written");
                writeln!(out, "Wrote {}", path.display())?;
            } else {
                write!(out, "{}", config.to_toml()?)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> String {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_bmi_text_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(&dir, "");
        let out = run_to_string(&[
            "healthcalc", "--no-color", "-c", &config, "bmi", "--weight", "70", "--height", "1.75",
        ])
        .unwrap();
        assert_eq!(out.trim(), "BMI 22.86 (Normal weight)");
    }

    #[test]
    fn test_classify_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(&dir, "");
        let out = run_to_string(&["healthcalc", "-c", &config, "--json", "classify", "30"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["category"], "Obesity");
    }

    #[test]
    fn test_invalid_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(&dir, "");
        let err = run_to_string(&["healthcalc", "-c", &config, "classify", "150.1"]).unwrap_err();
        assert!(err.to_string().contains("Invalid health data"));
    }

    #[test]
    fn test_config_precision_applies() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(&dir, "[output]\nprecision = 3\ncolor = false\n");
        let out = run_to_string(&[
            "healthcalc", "-c", &config, "bmi", "--weight", "70", "--height", "1.75",
        ])
        .unwrap();
        assert_eq!(out.trim(), "BMI 22.857 (Normal weight)");
    }

    #[test]
    fn test_config_write_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("config.toml");
        let path_str = path.to_string_lossy().into_owned();

        assert!(!path.exists());
        let out = run_to_string(&["healthcalc", "-c", &path_str, "config", "--write"]).unwrap();
        assert!(out.starts_with("Wrote"));
        assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
    }

    #[test]
    fn test_config_write_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(&dir, "[output]\nprecision = 4\n");

        run_to_string(&["healthcalc", "-c", &config, "config", "--write"]).unwrap();
        let saved = Config::load(Some(std::path::Path::new(&config))).unwrap();
        assert_eq!(saved.output.precision, 4);
    }

    #[test]
    fn test_missing_config_still_fails_for_calculations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = run_to_string(&["healthcalc", "-c", &path.to_string_lossy(), "classify", "22"])
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
