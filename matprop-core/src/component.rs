use num_dual::DualNum;
use std::fmt;

/// Identity of a pure substance.
///
/// All further capabilities are expressed as separate traits, so a
/// substance only implements the properties it actually has data for.
/// Generic code selects the capabilities it needs through trait bounds.
///
/// None of the property functions validate their arguments. Inputs
/// outside of the physical range yield whatever the correlation
/// computes.
pub trait Component: fmt::Debug + Send + Sync {
    /// A human readable name of the substance.
    fn name(&self) -> &'static str;
}

/// Molar mass of a substance.
pub trait MolarMass: Component {
    /// The molar mass in kg/mol.
    fn molar_mass(&self) -> f64;
}

/// Critical point of a substance.
pub trait CriticalPoint: Component {
    /// Critical temperature in K.
    fn critical_temperature(&self) -> f64;

    /// Critical pressure in Pa.
    fn critical_pressure(&self) -> f64;
}

/// Triple point of a substance.
pub trait TriplePoint: Component {
    /// Triple point temperature in K.
    fn triple_temperature(&self) -> f64;

    /// Triple point pressure in Pa.
    fn triple_pressure(&self) -> f64;
}

/// Density of the liquid phase.
pub trait LiquidDensity: Component {
    /// The liquid density in kg/m³ at `temperature` in K and `pressure` in Pa.
    fn liquid_density<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D;
}

/// Dynamic viscosity of the liquid phase.
pub trait LiquidViscosity: Component {
    /// The liquid viscosity in Pa s at `temperature` in K and `pressure` in Pa.
    fn liquid_viscosity<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D;
}

/// Density of the gas phase.
pub trait GasDensity: Component {
    /// The gas density in kg/m³ at `temperature` in K and `pressure` in Pa.
    fn gas_density<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D;
}

/// Dynamic viscosity of the gas phase.
pub trait GasViscosity: Component {
    /// The gas viscosity in Pa s at `temperature` in K and `pressure` in Pa.
    fn gas_viscosity<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D;
}

/// Pressure on the liquid-vapor coexistence line.
pub trait VaporPressure: Component {
    /// The vapor pressure in Pa at `temperature` in K.
    fn vapor_pressure<D: DualNum<f64> + Copy>(&self, temperature: D) -> D;
}
