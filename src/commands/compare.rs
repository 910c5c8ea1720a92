//! The compare command.

use crate::cli::Cli;
use crate::compare::compare_trees;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::exit_codes;
use crate::render::{TextReport, write_json_report};
use crate::steering::SteeringFile;
use std::io::Write;
use tracing::info;

/// Compare the two steering files named in `args` and write the report to `out`.
///
/// Both files are loaded and parsed before anything is written, so a
/// missing or malformed file produces no report output.
///
/// # Returns
///
/// * `Ok(exit_code)` - `SUCCESS`, or `DIFFERENCES_FOUND` when requested and the files differ
/// * `Err(SteerDiffError)` - Config, load, or parse failure
pub fn cmd_compare<W: Write>(args: &Cli, out: &mut W) -> Result<i32> {
    let config = effective_config(args)?;

    let first_file = SteeringFile::load(&args.first)?;
    let second_file = SteeringFile::load(&args.second)?;
    let first = first_file.parse()?;
    let second = second_file.parse()?;

    info!(
        first = %first_file.path().display(),
        second = %second_file.path().display(),
        "comparing steering files"
    );

    let report = compare_trees(&first, &second, &config.compare_options());

    match config.format {
        OutputFormat::Text => write!(out, "{}", TextReport(&report))?,
        OutputFormat::Json => write_json_report(out, &report)?,
    }
    out.flush()?;

    if config.fail_on_difference && report.has_differences() {
        Ok(exit_codes::DIFFERENCES_FOUND)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Config file values with command line overrides applied.
fn effective_config(args: &Cli) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(format) = args.format {
        config.format = format;
    }
    if args.symmetric {
        config.symmetric_steps = true;
    }
    if args.exit_code {
        config.fail_on_difference = true;
    }
    if !args.filters.is_empty() {
        config.processor_filters = args.filters.clone();
    }

    config.validate()?;
    Ok(config)
}
