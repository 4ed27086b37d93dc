use super::ideal_gas;
use matprop_core::{Component, CriticalPoint, GasDensity, GasViscosity, MolarMass, TriplePoint};
use num_dual::DualNum;

const MOLAR_MASS: f64 = 28.0134e-3;
const CRITICAL_TEMPERATURE: f64 = 126.2;
const CRITICAL_PRESSURE: f64 = 33.9e5;
const TRIPLE_TEMPERATURE: f64 = 63.151;
const TRIPLE_PRESSURE: f64 = 12.523e3;

// Chung et al. parameters
const CRITICAL_VOLUME: f64 = 90.1; // [cm^3/mol]
const ACENTRIC_FACTOR: f64 = 0.037;
const DIPOLE_MOMENT: f64 = 0.0; // [debye]

/// Molecular nitrogen.
///
/// The gas phase is treated as an ideal gas.
#[derive(Clone, Copy, Debug, Default)]
pub struct N2;

impl Component for N2 {
    fn name(&self) -> &'static str {
        "N2"
    }
}

impl MolarMass for N2 {
    fn molar_mass(&self) -> f64 {
        MOLAR_MASS
    }
}

impl CriticalPoint for N2 {
    fn critical_temperature(&self) -> f64 {
        CRITICAL_TEMPERATURE
    }

    fn critical_pressure(&self) -> f64 {
        CRITICAL_PRESSURE
    }
}

impl TriplePoint for N2 {
    fn triple_temperature(&self) -> f64 {
        TRIPLE_TEMPERATURE
    }

    fn triple_pressure(&self) -> f64 {
        TRIPLE_PRESSURE
    }
}

impl GasDensity for N2 {
    fn gas_density<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D {
        ideal_gas::density(MOLAR_MASS, temperature, pressure)
    }
}

impl GasViscosity for N2 {
    /// Viscosity of gaseous nitrogen using the method of Chung et al.
    ///
    /// The pressure dependence is neglected.
    ///
    /// See: R. Reid et al.: "The Properties of Gases and Liquids",
    /// 4th edition, pp. 396-397, McGraw-Hill, 1987
    fn gas_viscosity<D: DualNum<f64> + Copy>(&self, temperature: D, _pressure: D) -> D {
        let m = MOLAR_MASS * 1e3; // [g/mol]
        let mu_r = 131.3 * DIPOLE_MOMENT / (CRITICAL_VOLUME * CRITICAL_TEMPERATURE).sqrt();
        let mu_r4 = mu_r * mu_r * mu_r * mu_r;
        let fc = 1.0 - 0.2756 * ACENTRIC_FACTOR + 0.059035 * mu_r4;

        let t_star = temperature * 1.2593 / CRITICAL_TEMPERATURE;
        let omega_v = t_star.powf(-0.14874) * 1.16145
            + (t_star * -0.77320).exp() * 0.52487
            + (t_star * -2.43787).exp() * 2.16178;
        let mu = (temperature * m).sqrt() * (40.785 * fc)
            / (omega_v * CRITICAL_VOLUME.powf(2.0 / 3.0));

        // micro poise to Pa s
        mu / 1e6 / 10.0
    }
}
