/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the units module

use thiserror::Error;

/// Errors that can occur while normalizing a length
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit token is not in the length table
    #[error("{0} is not a recognized unit.")]
    UnrecognizedUnit(String),

    /// The value could not be parsed as a decimal number
    #[error("{0} is not a valid number.")]
    InvalidNumber(String),

    /// The value parsed, but to NaN or infinity
    #[error("{0} is not a finite number.")]
    NonFinite(String),
}

/// A specialized Result type for unit operations
pub type Result<T> = std::result::Result<T, UnitError>;
