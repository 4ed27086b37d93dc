use matprop_core::{Component, CriticalPoint, MolarMass, TriplePoint, VaporPressure};
use num_dual::DualNum;

const MOLAR_MASS: f64 = 18.01518e-3;
const CRITICAL_TEMPERATURE: f64 = 647.096;
const CRITICAL_PRESSURE: f64 = 22.064e6;
const TRIPLE_TEMPERATURE: f64 = 273.16;
const TRIPLE_PRESSURE: f64 = 611.657;

/// Coefficients of the saturation line of IAPWS-IF97 (region 4).
const N: [f64; 10] = [
    0.11670521452767e4,
    -0.72421316598500e6,
    -0.17073846940092e2,
    0.12020824702470e5,
    -0.32325550322333e7,
    0.14915108613530e2,
    -0.48232657361591e4,
    0.40511340542057e6,
    -0.23855557567849,
    0.65017534844798e3,
];

/// Pure water.
///
/// Only the constants and the vapor pressure are provided, which is
/// what the binary coefficients of aqueous systems require.
#[derive(Clone, Copy, Debug, Default)]
pub struct H2O;

impl Component for H2O {
    fn name(&self) -> &'static str {
        "H2O"
    }
}

impl MolarMass for H2O {
    fn molar_mass(&self) -> f64 {
        MOLAR_MASS
    }
}

impl CriticalPoint for H2O {
    fn critical_temperature(&self) -> f64 {
        CRITICAL_TEMPERATURE
    }

    fn critical_pressure(&self) -> f64 {
        CRITICAL_PRESSURE
    }
}

impl TriplePoint for H2O {
    fn triple_temperature(&self) -> f64 {
        TRIPLE_TEMPERATURE
    }

    fn triple_pressure(&self) -> f64 {
        TRIPLE_PRESSURE
    }
}

impl VaporPressure for H2O {
    /// Vapor pressure of water according to IAPWS-IF97.
    ///
    /// Temperatures outside of the range between triple point and
    /// critical point are moved to the closest end of the saturation
    /// line.
    ///
    /// See: IAPWS: "Revised Release on the IAPWS Industrial Formulation
    /// 1997 for the Thermodynamic Properties of Water and Steam",
    /// http://www.iapws.org/relguide/IF97-Rev.pdf
    fn vapor_pressure<D: DualNum<f64> + Copy>(&self, temperature: D) -> D {
        let t = if temperature.re() > CRITICAL_TEMPERATURE {
            D::from(CRITICAL_TEMPERATURE)
        } else if temperature.re() < TRIPLE_TEMPERATURE {
            D::from(TRIPLE_TEMPERATURE)
        } else {
            temperature
        };
        saturation_pressure(t)
    }
}

fn saturation_pressure<D: DualNum<f64> + Copy>(temperature: D) -> D {
    let sigma = temperature + D::from(N[8]) / (temperature - N[9]);
    let a = (sigma + N[0]) * sigma + N[1];
    let b = (sigma * N[2] + N[3]) * sigma + N[4];
    let c = (sigma * N[5] + N[6]) * sigma + N[7];

    let tmp = c * 2.0 / ((b * b - a * 4.0 * c).sqrt() - b);
    let tmp = tmp * tmp;
    tmp * tmp * 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_dual::first_derivative;

    #[test]
    fn constants() {
        assert_eq!(H2O.name(), "H2O");
        assert_eq!(H2O.molar_mass(), 18.01518e-3);
        assert_eq!(H2O.critical_temperature(), 647.096);
        assert_eq!(H2O.triple_temperature(), 273.16);
    }

    #[test]
    fn if97_verification_values() {
        // table 35 of IAPWS-IF97
        assert_relative_eq!(H2O.vapor_pressure(300.0), 0.353658941e4, max_relative = 1e-8);
        assert_relative_eq!(H2O.vapor_pressure(500.0), 0.263889776e7, max_relative = 1e-8);
        assert_relative_eq!(H2O.vapor_pressure(600.0), 0.123443146e8, max_relative = 1e-8);
    }

    #[test]
    fn clamped_to_saturation_line() {
        assert_eq!(
            H2O.vapor_pressure(700.0),
            H2O.vapor_pressure(CRITICAL_TEMPERATURE)
        );
        assert_eq!(
            H2O.vapor_pressure(200.0),
            H2O.vapor_pressure(TRIPLE_TEMPERATURE)
        );
        assert_relative_eq!(
            H2O.vapor_pressure(CRITICAL_TEMPERATURE),
            CRITICAL_PRESSURE,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            H2O.vapor_pressure(TRIPLE_TEMPERATURE),
            TRIPLE_PRESSURE,
            max_relative = 1e-3
        );
    }

    #[test]
    fn clausius_clapeyron_slope() {
        // the vapor pressure increases with temperature and the derivative
        // agrees with a central difference
        let t = 373.15;
        let (p, dp_dt) = first_derivative(|t| H2O.vapor_pressure(t), t);
        let h = 1e-4;
        let dp_dt_h = (H2O.vapor_pressure(t + h) - H2O.vapor_pressure(t - h)) / (2.0 * h);
        assert_relative_eq!(p, 101_325.0, max_relative = 2e-3);
        assert!(dp_dt > 0.0);
        assert_relative_eq!(dp_dt, dp_dt_h, max_relative = 1e-6);
    }
}
