/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for a conversion run

use crate::units::MillimeterConvention;

/// Conversion run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Meaning of the `mm` unit token
    pub millimeter: MillimeterConvention,
    /// Exit code when no dimension flag is given
    pub missing_dimension_exit_code: i32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            millimeter: MillimeterConvention::Legacy,
            missing_dimension_exit_code: 0,
        }
    }
}
