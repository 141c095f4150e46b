/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Formatting of conversion results

use crate::energy::{prefixify, EnergyScale, Prefixed, Result};
use crate::units::Length;
use crate::utils::format_float;
use std::io::{self, Write};

/// Everything printed for one length conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Input value as given
    pub value: f64,
    /// Canonical unit symbol of the input
    pub unit: &'static str,
    /// Inverse energy, read as `/unit`
    pub inverse: Prefixed,
    /// Energy scale
    pub energy: Prefixed,
}

impl Report {
    /// Convert a length and prefix both of its energy quantities
    pub fn from_length(length: &Length) -> Result<Self> {
        let scale = EnergyScale::from_meters(length.meters())?;

        Ok(Self {
            value: length.value,
            unit: length.symbol(),
            inverse: prefixify(scale.inverse_ev, true)?,
            energy: prefixify(scale.ev, false)?,
        })
    }
}

/// Write the two report lines
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(
        out,
        "Length: {} {} = {} /{}",
        format_float(report.value),
        report.unit,
        format_float(report.inverse.value),
        report.inverse.unit
    )?;
    writeln!(out, "Energy scale: {}", report.energy)
}
