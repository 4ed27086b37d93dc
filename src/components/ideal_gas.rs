//! Relations of the ideal gas.
use matprop_core::constants::IDEAL_GAS_CONSTANT;
use num_dual::DualNum;

/// Density in kg/m³ of an ideal gas with molar mass `molar_mass` in kg/mol.
pub fn density<D: DualNum<f64> + Copy>(molar_mass: f64, temperature: D, pressure: D) -> D {
    pressure * molar_mass / (temperature * IDEAL_GAS_CONSTANT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_dual::first_derivative;

    #[test]
    fn equation_of_state() {
        // p = rho R T / M
        let t = 300.0;
        let p = 1e5;
        let rho = density(0.028, t, p);
        assert_relative_eq!(rho * IDEAL_GAS_CONSTANT * t / 0.028, p, max_relative = 1e-14);
        assert_relative_eq!(density(0.014, t, p), 0.5 * rho, max_relative = 1e-14);
    }

    #[test]
    fn isothermal_compressibility() {
        // d rho / d p = rho / p
        let t = 350.0;
        let (rho, drho_dp) = first_derivative(|p| density(0.018, t.into(), p), 2e5);
        assert_relative_eq!(drho_dp, rho / 2e5, max_relative = 1e-14);
    }
}
