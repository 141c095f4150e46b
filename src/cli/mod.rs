/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module parses the `ever` command line and drives a conversion,
//! writing results to any [`std::io::Write`].

pub mod config;
pub mod errors;

pub use config::ConversionConfig;
pub use errors::{CliError, Result};

use crate::output::{write_report, Report};
use crate::units::normalize;
use clap::Parser;
use log::{debug, info};
use std::ffi::OsString;
use std::io::Write;

/// Message printed when no dimension flag is given
pub const MISSING_DIMENSION: &str = "Must specify dimension to convert.";

/// Convert units to electron volt equivalents.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ever", author, version, about, long_about = None)]
pub struct Args {
    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Convert length with unit.
    #[arg(short, long, value_name = "UNIT")]
    pub length: Option<String>,
}

/// Physical dimension selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    /// Length with the given unit token
    Length(String),
}

impl Args {
    /// The dimension to convert, if one was selected
    ///
    /// An empty unit (`-l ''`) counts as no selection.
    pub fn dimension(&self) -> Option<Dimension> {
        self.length
            .clone()
            .filter(|unit| !unit.is_empty())
            .map(Dimension::Length)
    }
}

/// Run a conversion for already parsed arguments
///
/// Returns the exit code for a run that printed normally. Conversion
/// failures are returned as errors and nothing is written to `out`.
pub fn run<W: Write>(args: &Args, config: &ConversionConfig, out: &mut W) -> Result<i32> {
    let Some(dimension) = args.dimension() else {
        info!("no dimension flag given");
        writeln!(out, "{}", MISSING_DIMENSION)?;
        return Ok(config.missing_dimension_exit_code);
    };

    match dimension {
        Dimension::Length(unit) => {
            debug!("converting length {} {}", args.value, unit);
            let length = normalize(&args.value, &unit, config.millimeter)?;
            let report = Report::from_length(&length)?;
            write_report(out, &report)?;
        }
    }

    Ok(0)
}

/// Parse `argv` and run a conversion
///
/// The first item is the program name, as with [`std::env::args_os`].
pub fn run_from<I, T, W>(argv: I, config: &ConversionConfig, out: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = Args::try_parse_from(argv)?;
    run(&args, config, out)
}
