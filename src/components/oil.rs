use matprop_core::{Component, LiquidDensity, LiquidViscosity};
use num_dual::DualNum;

/// Rough estimate of some oil for testing purposes.
///
/// Density and viscosity are constants that ignore temperature and
/// pressure entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Oil;

impl Component for Oil {
    fn name(&self) -> &'static str {
        "Oil"
    }
}

impl LiquidDensity for Oil {
    /// Rough estimate of the density of oil in kg/m³.
    fn liquid_density<D: DualNum<f64> + Copy>(&self, _temperature: D, _pressure: D) -> D {
        D::from(890.0)
    }
}

impl LiquidViscosity for Oil {
    /// Rough estimate of the viscosity of oil in Pa s.
    fn liquid_viscosity<D: DualNum<f64> + Copy>(&self, _temperature: D, _pressure: D) -> D {
        D::from(8e-3)
    }
}
