/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used in length to energy conversions

/// Reduced Planck constant in eV·s
pub const HBAR: f64 = 6.582119514e-16;

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 299792458.0;

/// hbar * c in eV·m
pub const HBAR_C: f64 = HBAR * SPEED_OF_LIGHT;

/// Meters per international inch
pub const INCH_TO_METER: f64 = 0.0254;

/// Meters per international foot
pub const FOOT_TO_METER: f64 = 0.3048;

/// Meters per international yard
pub const YARD_TO_METER: f64 = 0.9144;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hbar_c() {
        // ~197.327 MeV·fm
        assert_relative_eq!(HBAR_C, 1.97327e-7, max_relative = 1e-5);
    }

    #[test]
    fn test_imperial_lengths_are_consistent() {
        assert_relative_eq!(FOOT_TO_METER, 12.0 * INCH_TO_METER, epsilon = 1e-15);
        assert_relative_eq!(YARD_TO_METER, 3.0 * FOOT_TO_METER, epsilon = 1e-15);
    }
}
