/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Photon energy calculations
//!
//! This module converts lengths in meters to inverse energies and energy
//! scales, and formats them with engineering-notation eV prefixes.

pub mod converter;
pub mod errors;
pub mod prefix;

pub use converter::EnergyScale;
pub use errors::{EnergyError, Result};
pub use prefix::{prefix_symbol, prefixify, Prefixed, BASE_UNIT, PREFIXES};
