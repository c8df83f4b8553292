//! healthcalc - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use healthcalc::cli::{self, Args};
use healthcalc::logging::init_logging;

fn main() {
    let args = Args::parse();
    init_logging(args.verbosity());

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = execute(&args) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn execute(args: &Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(args, &mut out)
}
