/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # ever-rs
//!
//! Convert lengths to their electron volt energy-scale equivalents.
//!
//! A wavelength `L` is associated with the inverse energy `L / (hbar * c)`
//! and the energy scale `hbar * c / L`. Both are reported in engineering
//! notation with SI prefixes on eV.
//!
//! ```
//! use ever_rs::units::{normalize, MillimeterConvention};
//! use ever_rs::output::Report;
//!
//! let length = normalize("1.0", "km", MillimeterConvention::Legacy).unwrap();
//! let report = Report::from_length(&length).unwrap();
//! assert_eq!(report.inverse.unit, "neV");
//! assert_eq!(report.energy.unit, "peV");
//! ```

pub mod cli;
pub mod energy;
pub mod output;
pub mod units;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
