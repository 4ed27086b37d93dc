//! Constitutive relations between fluids and the porous matrix.
//!
//! The parameter holders store calibrated values only. The
//! regularized Brooks-Corey capillary pressure curve is evaluated by
//! external code, which reads the regularization threshold through
//! [RegularizationThreshold].
mod brooks_corey;
mod brooks_corey_params;

pub use brooks_corey::BrooksCorey;
pub use brooks_corey_params::{
    BrooksCoreyParameters, BrooksCoreyParams, RegularizationThreshold,
    RegularizedBrooksCoreyParams,
};
