/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the command line interface

use crate::energy::EnergyError;
use crate::units::UnitError;
use std::io;
use thiserror::Error;

/// Errors that end a command line run
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Energy(#[from] EnergyError),

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(err) => err.exit_code(),
            _ => 1,
        }
    }
}

/// A specialized Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
