//! Binary coefficients of substance pairs.
//!
//! Each calculator combines the shared correlations of this module with
//! constants calibrated for one pair of substances. [registry] collects
//! all calculators of the crate in a
//! [BinaryCoefficientsRegistry](matprop_core::BinaryCoefficientsRegistry).
use matprop_core::{BinaryCoefficientsRegistry, MaterialResult};
use std::sync::Arc;

mod fuller_method;
mod h2o_n2;
mod henry_iapws;

pub use fuller_method::{fuller_method, harmonic_mean};
pub use h2o_n2::H2ON2;
pub use henry_iapws::henry_iapws;

/// Registry of all binary coefficient calculators of the crate.
pub fn registry() -> MaterialResult<BinaryCoefficientsRegistry> {
    BinaryCoefficientsRegistry::from_calculators(vec![Arc::new(H2ON2)])
}
