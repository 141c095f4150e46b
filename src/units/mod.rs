/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Length units and their normalization to meters
//!
//! This module owns the table of supported length units and turns a raw
//! command-line value plus a unit token into a [`Length`].

pub mod errors;
pub mod length;

pub use errors::{Result, UnitError};
pub use length::{normalize, parse_value, Length, LengthUnit, MillimeterConvention};
