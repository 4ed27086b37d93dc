//! Pure substances and the capabilities they support.
//!
//! | substance | capabilities |
//! |-|-|
//! | [H2O] | molar mass, critical/triple point, vapor pressure |
//! | [N2] | molar mass, critical/triple point, gas density and viscosity |
//! | [Oil] | liquid density and viscosity |
pub mod ideal_gas;
mod h2o;
mod n2;
mod oil;

pub use h2o::H2O;
pub use n2::N2;
pub use oil::Oil;
