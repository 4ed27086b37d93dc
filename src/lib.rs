#![warn(clippy::all)]
#![allow(clippy::excessive_precision)]
//! Thermophysical and transport property correlations for porous-media
//! flow models.
//!
//! All property functions are pure and generic over
//! [num_dual::DualNum], so the same code evaluates values with `f64`
//! and analytic derivatives with dual numbers.

pub mod binary_coefficients;
pub mod components;
pub mod fluid_matrix;
pub mod tabulated;
