/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Engineering-notation prefixes for electron volt values
//!
//! A raw value is shifted by a multiple of three decades into `[1, 1000)` and
//! paired with the matching SI prefix. Prefixes run from atto to exa; values
//! outside that range are clamped to `a` or `E` and keep a larger mantissa.

use super::errors::{EnergyError, Result};
use log::trace;
use std::fmt;

/// Base unit that prefixes are attached to
pub const BASE_UNIT: &str = "eV";

/// Largest decade exponent with an SI prefix in the table
pub const MAX_EXPONENT: i32 = 18;

/// SI prefixes sorted by decade exponent
pub const PREFIXES: [(i32, &str); 13] = [
    (-18, "a"),
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "u"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
];

/// Symbol for a decade exponent, clamped to the ends of the table
pub fn prefix_symbol(exponent: i32) -> &'static str {
    let exponent = exponent.clamp(-MAX_EXPONENT, MAX_EXPONENT);
    PREFIXES
        .binary_search_by_key(&exponent, |&(power, _)| power)
        .map(|index| PREFIXES[index].1)
        .unwrap_or("")
}

/// A value rescaled into engineering notation
#[derive(Debug, Clone, PartialEq)]
pub struct Prefixed {
    /// Rescaled value
    pub value: f64,
    /// Prefixed unit, e.g. `keV`
    pub unit: String,
    /// Decade exponent the raw value was multiplied by
    pub power: i32,
}

impl fmt::Display for Prefixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", crate::utils::format_float(self.value), self.unit)
    }
}

/// Rescale `value` and pick its eV prefix
///
/// `inverse` marks values in eV⁻¹: their prefix reads as a reciprocal unit
/// (`/ueV`), so the prefix exponent is the shift itself rather than its
/// negation.
///
/// # Arguments
///
/// * `value` - Positive, finite magnitude
/// * `inverse` - Whether `value` is an inverse energy
///
/// # Returns
///
/// The rescaled value with its prefixed unit
pub fn prefixify(value: f64, inverse: bool) -> Result<Prefixed> {
    if !(value.is_finite() && value > 0.0) {
        return Err(EnergyError::NonPositiveMagnitude(value));
    }

    let mut power = -3 * (value.log10() / 3.0).floor() as i32;
    let check_power = if inverse { power } else { -power };

    if check_power.abs() >= MAX_EXPONENT {
        let clamped = check_power.signum() * MAX_EXPONENT;
        power = if inverse { clamped } else { -clamped };
    }

    let unit = format!("{}{}", prefix_symbol(check_power), BASE_UNIT);
    let scaled = value * 10f64.powf(power as f64);
    trace!(
        "prefixify({}, inverse={}) -> {} {} (power {})",
        value,
        inverse,
        scaled,
        unit,
        power
    );

    Ok(Prefixed {
        value: scaled,
        unit,
        power,
    })
}
