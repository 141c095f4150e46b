/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the energy module

use crate::utils::format_float;
use thiserror::Error;

/// Errors that can occur while converting lengths to energies
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnergyError {
    /// Zero or negative lengths have no photon energy
    #[error("Length must be positive to have an energy scale, got {} m", format_float(*.0))]
    NonPositiveLength(f64),

    /// Positive length whose energy overflows or underflows an f64
    #[error("Length {} m is outside the representable energy range", format_float(*.0))]
    OutOfRange(f64),

    /// The prefixer needs a positive finite magnitude for log10
    #[error(
        "Cannot choose a metric prefix for non-positive or non-finite value {}",
        format_float(*.0)
    )]
    NonPositiveMagnitude(f64),
}

/// A specialized Result type for energy operations
pub type Result<T> = std::result::Result<T, EnergyError>;
