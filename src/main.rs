/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for ever-rs

use clap::Parser;
use ever_rs::cli::{self, Args, CliError, ConversionConfig};
use std::io::{self, Write};
use std::process;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = ConversionConfig::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli::run(&args, &config, &mut out) {
        Ok(code) => {
            out.flush()?;
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(CliError::Io(err)) => Err(err.into()),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    }
}
