use crate::components::H2O;
use matprop_core::{CriticalPoint, TriplePoint, VaporPressure};
use num_dual::DualNum;

const C: [f64; 6] = [
    1.99274064,
    1.09965342,
    -0.510839303,
    -1.75493479,
    -45.5170352,
    -6.7469445e5,
];
const D_EXP: [f64; 6] = [
    1.0 / 3.0,
    2.0 / 3.0,
    5.0 / 3.0,
    16.0 / 3.0,
    43.0 / 3.0,
    110.0 / 3.0,
];
const Q: f64 = -0.023767;

/// Henry coefficient in Pa of a gas dissolved in liquid water according
/// to the IAPWS guideline.
///
/// `e`, `f`, `g` and `h` are the constants of the solute. The result is
/// only meaningful within the temperature range the constants were
/// fitted to.
///
/// See: IAPWS: "Guideline on the Henry's Constant and Vapor-Liquid
/// Distribution Constant for Gases in H2O and D2O at High
/// Temperatures", http://www.iapws.org/relguide/HenGuide.pdf
pub fn henry_iapws<D: DualNum<f64> + Copy>(e: f64, f: f64, g: f64, h: f64, temperature: D) -> D {
    let tr = temperature / H2O.critical_temperature();
    let tau = D::from(1.0) - tr;

    let f_tau = C
        .iter()
        .zip(D_EXP.iter())
        .fold(D::zero(), |acc, (&c, &d)| acc + tau.powf(d) * c);

    let exponent = D::from(Q * f)
        + D::from(e) / temperature * f_tau
        + (tau.powf(2.0 / 3.0) * g + f + tau * h)
            * ((D::from(H2O.triple_temperature()) - temperature) / 100.0).exp();

    // K_D is formulated in mole fractions, the vapor pressure of water
    // converts it into a partial pressure
    exponent.exp() * H2O.vapor_pressure(temperature)
}
