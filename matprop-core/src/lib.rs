#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]
//! Core traits and functionalities for the `matprop` project.
//!
//! The crate defines the capability contract of pure substances
//! ([Component] and the property traits), the contract of binary
//! coefficient calculators ([BinaryCoefficients]) together with a
//! registry to look them up by substance pair, shared constants,
//! and the record types used to load calibrated parameters.
//!
//! Every property function is generic over [num_dual::DualNum] so that
//! derivatives with respect to the state variables can be obtained by
//! passing dual numbers instead of `f64`.

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Result {
            println!($($arg)*);
        }
    }
}

mod binary;
mod component;
pub mod constants;
mod errors;
pub mod parameter;

pub use binary::{
    BinaryCoefficients, BinaryCoefficientsDual, BinaryCoefficientsRegistry, SubstancePair,
};
pub use component::{
    Component, CriticalPoint, GasDensity, GasViscosity, LiquidDensity, LiquidViscosity, MolarMass,
    TriplePoint, VaporPressure,
};
pub use errors::{MaterialError, MaterialResult};

/// Level of detail in the output of setup routines.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print a summary once a routine has finished.
    Result,
    /// Print detailed output for every step.
    Iter,
}
