/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Length unit table and normalization to meters

use super::errors::{Result, UnitError};
use crate::utils::constants::{FOOT_TO_METER, INCH_TO_METER, YARD_TO_METER};
use log::{debug, info};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A supported length unit
///
/// A value in this unit is converted to meters as `value / divisor * scale`.
/// Keeping the divisor separate reproduces the exact floating-point result of
/// units that are defined by division (`dm`, `cm`, `thou`, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthUnit {
    /// Canonical display symbol
    pub symbol: &'static str,
    /// Multiplier applied after the divisor
    pub scale: f64,
    /// Divisor applied first
    pub divisor: f64,
}

impl LengthUnit {
    const fn new(symbol: &'static str, scale: f64, divisor: f64) -> Self {
        Self {
            symbol,
            scale,
            divisor,
        }
    }

    /// Convert a value in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        value / self.divisor * self.scale
    }

    /// Meters per one of this unit
    pub fn factor(&self) -> f64 {
        self.to_meters(1.0)
    }

    /// Look up a unit token or one of its aliases
    ///
    /// Matching is exact and case-sensitive: `Mm` is megameters, `mm` is
    /// millimeters.
    pub fn lookup(token: &str) -> Option<&'static LengthUnit> {
        UNIT_TABLE.get(token).copied()
    }

    /// All canonical units in table order
    pub fn all() -> &'static [LengthUnit] {
        &LENGTH_UNITS
    }
}

/// How to interpret the `mm` token
///
/// Historically `mm` was converted by dividing by 1e-3, giving 1000 m per
/// "millimeter". `Legacy` keeps that factor for compatibility; `Si` uses the
/// SI definition of 1e-3 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MillimeterConvention {
    #[default]
    Legacy,
    Si,
}

static LENGTH_UNITS: [LengthUnit; 22] = [
    LengthUnit::new("m", 1.0, 1.0),
    LengthUnit::new("dm", 1.0, 10.0),
    LengthUnit::new("cm", 1.0, 100.0),
    LengthUnit::new("mm", 1.0, 1.0e-3),
    LengthUnit::new("um", 1.0e-6, 1.0),
    LengthUnit::new("nm", 1.0e-9, 1.0),
    LengthUnit::new("pm", 1.0e-12, 1.0),
    LengthUnit::new("fm", 1.0e-15, 1.0),
    LengthUnit::new("am", 1.0e-18, 1.0),
    LengthUnit::new("dam", 10.0, 1.0),
    LengthUnit::new("hm", 100.0, 1.0),
    LengthUnit::new("km", 1.0e3, 1.0),
    LengthUnit::new("Mm", 1.0e6, 1.0),
    LengthUnit::new("Gm", 1.0e9, 1.0),
    LengthUnit::new("Tm", 1.0e12, 1.0),
    LengthUnit::new("Pm", 1.0e15, 1.0),
    LengthUnit::new("Em", 1.0e18, 1.0),
    LengthUnit::new("in", INCH_TO_METER, 1.0),
    LengthUnit::new("ft", FOOT_TO_METER, 1.0),
    LengthUnit::new("yd", YARD_TO_METER, 1.0),
    LengthUnit::new("thou", INCH_TO_METER, 1000.0),
    LengthUnit::new("tenth", INCH_TO_METER, 10000.0),
];

static MILLIMETER_SI: LengthUnit = LengthUnit::new("mm", 1.0e-3, 1.0);

/// Spelled-out aliases and the canonical symbol they resolve to
const ALIASES: [(&str, &str); 5] = [
    ("meter", "m"),
    ("inch", "in"),
    ("foot", "ft"),
    ("feet", "ft"),
    ("yard", "yd"),
];

static UNIT_TABLE: Lazy<HashMap<&'static str, &'static LengthUnit>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, &'static LengthUnit> =
        LENGTH_UNITS.iter().map(|unit| (unit.symbol, unit)).collect();

    for (alias, symbol) in ALIASES {
        if let Some(unit) = LENGTH_UNITS.iter().find(|unit| unit.symbol == symbol) {
            table.insert(alias, unit);
        }
    }

    table
});

/// A length expressed in one of the supported units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Value as given, in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: &'static LengthUnit,
}

impl Length {
    /// Create a length from a value and a resolved unit
    pub fn new(value: f64, unit: &'static LengthUnit) -> Self {
        Self { value, unit }
    }

    /// The length in meters
    pub fn meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }

    /// Canonical display symbol of the unit
    pub fn symbol(&self) -> &'static str {
        self.unit.symbol
    }
}

/// Parse a raw command-line value as a finite decimal number
pub fn parse_value(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| UnitError::InvalidNumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(UnitError::NonFinite(raw.to_string()));
    }

    Ok(value)
}

/// Normalize a raw value and unit token into a [`Length`]
///
/// The unit is resolved before the value is parsed, so an unknown unit is
/// reported even when the value is also malformed.
pub fn normalize(raw: &str, token: &str, millimeter: MillimeterConvention) -> Result<Length> {
    let unit = LengthUnit::lookup(token)
        .ok_or_else(|| UnitError::UnrecognizedUnit(token.to_string()))?;

    let unit = if unit.symbol == "mm" {
        match millimeter {
            MillimeterConvention::Legacy => {
                info!("using legacy millimeter factor of 1000 m/mm");
                unit
            }
            MillimeterConvention::Si => &MILLIMETER_SI,
        }
    } else {
        unit
    };

    let value = parse_value(raw)?;
    let length = Length::new(value, unit);
    debug!(
        "normalized {} {} ({}) to {} m",
        value,
        unit.symbol,
        token,
        length.meters()
    );

    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aliases_resolve_to_canonical_units() {
        assert_eq!(LengthUnit::lookup("meter").unwrap().symbol, "m");
        assert_eq!(LengthUnit::lookup("inch").unwrap().symbol, "in");
        assert_eq!(LengthUnit::lookup("foot").unwrap().symbol, "ft");
        assert_eq!(LengthUnit::lookup("feet").unwrap().symbol, "ft");
        assert_eq!(LengthUnit::lookup("yard").unwrap().symbol, "yd");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(LengthUnit::lookup("Mm").unwrap().factor(), 1.0e6);
        assert_eq!(LengthUnit::lookup("Pm").unwrap().factor(), 1.0e15);
        assert_eq!(LengthUnit::lookup("pm").unwrap().factor(), 1.0e-12);
        assert!(LengthUnit::lookup("M").is_none());
        assert!(LengthUnit::lookup("KM").is_none());
        assert!(LengthUnit::lookup("Meter").is_none());
    }

    #[test]
    fn test_table_symbols_are_unique() {
        let units = LengthUnit::all();
        for (i, unit) in units.iter().enumerate() {
            assert!(units[i + 1..].iter().all(|other| other.symbol != unit.symbol));
        }
        assert_eq!(UNIT_TABLE.len(), units.len() + ALIASES.len());
    }

    #[test]
    fn test_division_defined_units() {
        assert_eq!(LengthUnit::lookup("dm").unwrap().to_meters(3.0), 3.0 / 10.0);
        assert_eq!(
            LengthUnit::lookup("thou").unwrap().to_meters(7.0),
            7.0 / 1000.0 * INCH_TO_METER
        );
    }

    #[test]
    fn test_millimeter_conventions() {
        let legacy = normalize("2", "mm", MillimeterConvention::Legacy).unwrap();
        assert_relative_eq!(legacy.meters(), 2000.0);

        let si = normalize("2", "mm", MillimeterConvention::Si).unwrap();
        assert_relative_eq!(si.meters(), 2.0e-3);
        assert_eq!(si.symbol(), "mm");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("1.5").unwrap(), 1.5);
        assert_eq!(parse_value(" 2e3 ").unwrap(), 2000.0);
        assert_eq!(parse_value("-4").unwrap(), -4.0);
        assert_eq!(
            parse_value("abc"),
            Err(UnitError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(parse_value(""), Err(UnitError::InvalidNumber(String::new())));
        assert!(matches!(parse_value("inf"), Err(UnitError::NonFinite(_))));
        assert!(matches!(parse_value("NaN"), Err(UnitError::NonFinite(_))));
    }

    #[test]
    fn test_unknown_unit_reported_before_bad_value() {
        let err = normalize("abc", "xyz", MillimeterConvention::Legacy).unwrap_err();
        assert_eq!(err.to_string(), "xyz is not a recognized unit.");
    }
}
