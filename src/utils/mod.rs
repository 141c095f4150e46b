/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions for eV conversions
//!
//! This module provides the physical constants and small numeric helpers
//! shared by the unit and energy modules.

pub mod constants;

/// Format a float the way a scientist expects to read it back
///
/// Uses the shortest representation that round-trips, and always keeps a
/// fractional part for integral values (`1.0`, not `1`).
pub fn format_float(value: f64) -> String {
    let text = format!("{:?}", value);
    if text.contains(['.', 'e', 'E']) || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}
