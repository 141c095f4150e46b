/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Conversion between wavelengths and photon energies
//!
//! A wavelength `L` corresponds to an inverse energy `L / (hbar * c)` and to
//! the energy scale `hbar * c / L`.

use super::errors::{EnergyError, Result};
use crate::utils::constants::HBAR_C;
use log::trace;

/// Energy scale associated with a length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyScale {
    /// Length in meters
    pub meters: f64,
    /// Inverse energy in eV⁻¹
    pub inverse_ev: f64,
    /// Energy in eV
    pub ev: f64,
}

impl EnergyScale {
    /// Compute the energy scale of a length given in meters
    ///
    /// Zero and negative lengths are rejected instead of producing an
    /// infinite or negative energy. Positive lengths whose inverse energy or
    /// energy does not fit in an `f64` are reported as out of range.
    pub fn from_meters(meters: f64) -> Result<Self> {
        if meters.is_nan() || meters <= 0.0 {
            return Err(EnergyError::NonPositiveLength(meters));
        }

        let inverse_ev = meters / HBAR_C;
        let ev = 1.0 / inverse_ev;

        // Subnormal lengths overflow the reciprocal, huge ones the quotient
        let representable = |x: f64| x.is_finite() && x != 0.0;
        if !representable(inverse_ev) || !representable(ev) {
            return Err(EnergyError::OutOfRange(meters));
        }

        trace!("{} m -> {} /eV, {} eV", meters, inverse_ev, ev);
        Ok(Self {
            meters,
            inverse_ev,
            ev,
        })
    }

    /// Wavelength in meters for an inverse energy in eV⁻¹
    pub fn wavelength_from_inverse(inverse_ev: f64) -> f64 {
        inverse_ev * HBAR_C
    }

    /// Wavelength in meters for an energy in eV
    pub fn wavelength_from_energy(ev: f64) -> f64 {
        HBAR_C / ev
    }
}
