//! shaper-svg - Convert SVG files between Affinity Designer layer names and
//! Shaper Origin cut attributes.

mod cli;
mod config;
mod logger;
mod shaper;
mod svg;
mod transform;
mod utils;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ShaperConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ShaperConfig::load(cli.config.as_deref())?;

    let report = match &cli.command {
        Commands::Encode { args } => cli::encode::run_encode(args, &config)?,
        Commands::Decode { args } => cli::decode::run_decode(args, &config)?,
    };

    report.print();
    log!("done"; "{}", report);

    if report.has_failures() {
        bail!(
            "{} of {} files failed",
            report.failures.len(),
            report.failures.len() + report.converted
        );
    }
    Ok(())
}
