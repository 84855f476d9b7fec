//! # berlinclock
//!
//! Composition root that wires configuration, logging and the clock
//! formatter together.
//!
//! ## Responsibilities
//! - Parse CLI arguments and configuration (file, env vars)
//! - Initialise the tracing subscriber
//! - Feed times (arguments, stdin lines, or the system clock) through the
//!   `ClockFormatter` service and write the faces to stdout
//! - Report rejected inputs on stderr and reflect them in the exit status
//!
//! ## Dependency rule
//! This is the wiring layer. No clock logic belongs here.

mod config;
mod input;
mod logging;
mod output;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use berlin_clock_app::ports::SystemTimeSource;
use berlin_clock_app::services::ClockFormatter;
use clap::Parser;

use crate::config::Config;
use crate::output::{FaceWriter, OutputFormat};

/// Render wall-clock times as Berlin clock lamp rows.
#[derive(Debug, Parser)]
#[command(name = "berlinclock", version, long_about = None)]
struct Cli {
    /// Times to convert, formatted `HH:MM:SS`. Read from stdin when omitted.
    #[arg(value_name = "TIME", conflicts_with = "now")]
    times: Vec<String>,

    /// Render the current local time.
    #[arg(long)]
    now: bool,

    /// Output format, overriding the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to the configuration file.
    #[arg(
        long,
        value_name = "PATH",
        env = "BERLINCLOCK_CONFIG",
        default_value = "berlinclock.toml"
    )]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    logging::init(&config.logging.filter)?;
    tracing::debug!(format = ?config.output.format, "configuration loaded");

    let formatter = ClockFormatter::new(SystemTimeSource);
    let mut writer = FaceWriter::new(io::stdout().lock(), config.output.format);

    if cli.now {
        let (now, face) = formatter.current();
        writer.write(&now.to_string(), &face)?;
        writer.finish()?;
        return Ok(ExitCode::SUCCESS);
    }

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if cli.times.is_empty() {
        Box::new(input::lines(io::stdin().lock()))
    } else {
        Box::new(cli.times.into_iter().map(Ok))
    };

    let mut rejected = 0_usize;
    for input in inputs {
        let input = input.context("failed to read stdin")?;
        match formatter.clock_face(&input) {
            Ok(face) => writer.write(&input, &face)?,
            Err(err) => {
                rejected += 1;
                eprintln!("error: {err}");
            }
        }
    }
    writer.finish()?;

    if rejected > 0 {
        tracing::warn!(rejected, "some inputs were not valid times");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
