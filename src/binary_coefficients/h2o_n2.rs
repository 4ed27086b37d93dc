use super::{fuller_method, henry_iapws};
use crate::components::{H2O, N2};
use matprop_core::{BinaryCoefficients, BinaryCoefficientsDual, Component, MolarMass, SubstancePair};
use num_dual::DualNum;
use std::fmt;

// IAPWS constants of nitrogen in water
const E: f64 = 2388.8777;
const F: f64 = -14.9593;
const G: f64 = 42.0179;
const H: f64 = -29.4396;

/// Atomic diffusion volumes of water and nitrogen.
const DIFFUSION_VOLUMES: [f64; 2] = [13.1, 18.5];

/// Diffusion coefficient of nitrogen in water measured by Ferrell and
/// Himmelblau at 25 °C.
const REFERENCE_DIFFUSION_COEFFICIENT: f64 = 2.01e-9; // [m^2/s]
const REFERENCE_TEMPERATURE: f64 = 298.15; // [K]

/// Binary coefficients for water and nitrogen.
#[derive(Clone, Copy, Debug, Default)]
pub struct H2ON2;

impl<D: DualNum<f64> + Copy> BinaryCoefficientsDual<D> for H2ON2 {
    /// Henry coefficient in Pa for molecular nitrogen in liquid water.
    fn henry(&self, temperature: D) -> D {
        henry_iapws(E, F, G, H, temperature)
    }

    /// Binary diffusion coefficient in m²/s for molecular water and
    /// nitrogen in the gas phase, see [fuller_method].
    fn gas_diff_coeff(&self, temperature: D, pressure: D) -> D {
        // molar masses [g/mol]
        let molar_masses = [H2O.molar_mass() * 1e3, N2.molar_mass() * 1e3];
        fuller_method(molar_masses, DIFFUSION_VOLUMES, temperature, pressure)
    }

    /// Diffusion coefficient in m²/s for molecular nitrogen in liquid
    /// water.
    ///
    /// The empirical equations for the diffusion coefficient at infinite
    /// dilution presented in Reid et al. (1987) all depend linearly on
    /// temperature, so the measured coefficient is scaled by the
    /// temperature. The pressure is not used.
    ///
    /// See:
    ///
    /// R. Reid et al.: "The Properties of Gases and Liquids", 4th edition,
    /// pp. 599, McGraw-Hill, 1987
    ///
    /// R. Ferrell, D. Himmelblau: "Diffusion Coefficients of Nitrogen and
    /// Oxygen in Water", Journal of Chemical Engineering and Data,
    /// Vol. 12, No. 1, pp. 111-115, 1967
    fn liquid_diff_coeff(&self, temperature: D, _pressure: D) -> D {
        temperature / REFERENCE_TEMPERATURE * REFERENCE_DIFFUSION_COEFFICIENT
    }
}

impl BinaryCoefficients for H2ON2 {
    fn substances(&self) -> SubstancePair {
        SubstancePair::new(H2O.name(), N2.name())
    }
}

impl fmt::Display for H2ON2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H2O-N2")
    }
}
