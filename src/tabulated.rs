//! Tabulation of substance properties.
//!
//! Expensive correlations can be evaluated once on a rectangular grid of
//! temperatures and pressures and afterwards be interpolated
//! bilinearly. States outside of the grid are evaluated using the
//! wrapped substance directly.
use matprop_core::{
    log_iter, log_result, Component, GasDensity, GasViscosity, LiquidDensity, LiquidViscosity,
    MaterialError, MaterialResult, Verbosity,
};
use ndarray::{Array1, Array2};
use num_dual::DualNum;
#[cfg(feature = "rayon")]
use ndarray::Zip;

/// Equidistant grid of temperatures in K and pressures in Pa.
#[derive(Clone, Debug, PartialEq)]
pub struct TabulationGrid {
    temperature: Array1<f64>,
    pressure: Array1<f64>,
}

impl TabulationGrid {
    pub fn new(
        min_temperature: f64,
        max_temperature: f64,
        temperature_points: usize,
        min_pressure: f64,
        max_pressure: f64,
        pressure_points: usize,
    ) -> MaterialResult<Self> {
        if temperature_points < 2 || pressure_points < 2 {
            return Err(MaterialError::InvalidGrid(format!(
                "at least two points per axis are required, got {temperature_points} x {pressure_points}"
            )));
        }
        let bounds = [min_temperature, max_temperature, min_pressure, max_pressure];
        if bounds.iter().any(|x| !x.is_finite()) {
            return Err(MaterialError::InvalidGrid(format!(
                "bounds have to be finite, got T in [{min_temperature}, {max_temperature}] and p in [{min_pressure}, {max_pressure}]"
            )));
        }
        if max_temperature <= min_temperature {
            return Err(MaterialError::InvalidGrid(format!(
                "empty temperature range [{min_temperature}, {max_temperature}]"
            )));
        }
        if max_pressure <= min_pressure {
            return Err(MaterialError::InvalidGrid(format!(
                "empty pressure range [{min_pressure}, {max_pressure}]"
            )));
        }
        Ok(Self {
            temperature: Array1::linspace(min_temperature, max_temperature, temperature_points),
            pressure: Array1::linspace(min_pressure, max_pressure, pressure_points),
        })
    }

    pub fn temperature(&self) -> &Array1<f64> {
        &self.temperature
    }

    pub fn pressure(&self) -> &Array1<f64> {
        &self.pressure
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.temperature.len(), self.pressure.len())
    }

    /// Indices of the lower left corner of the cell containing the state.
    fn cell(&self, temperature: f64, pressure: f64) -> Option<(usize, usize)> {
        Some((
            lower_index(&self.temperature, temperature)?,
            lower_index(&self.pressure, pressure)?,
        ))
    }
}

fn lower_index(axis: &Array1<f64>, x: f64) -> Option<usize> {
    let n = axis.len();
    let (first, last) = (axis[0], axis[n - 1]);
    if !(x >= first && x <= last) {
        return None;
    }
    let i = ((x - first) / (last - first) * (n - 1) as f64).floor() as usize;
    Some(i.min(n - 2))
}

/// Values of a single property on the [TabulationGrid] they were
/// evaluated on.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyTable {
    grid: TabulationGrid,
    values: Array2<f64>,
}

impl PropertyTable {
    /// Evaluate `property` at every node of the grid.
    pub fn tabulate<F>(grid: &TabulationGrid, property: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let t = &grid.temperature;
        let p = &grid.pressure;

        #[cfg(not(feature = "rayon"))]
        let values = Array2::from_shape_fn(grid.shape(), |(i, j)| property(t[i], p[j]));

        #[cfg(feature = "rayon")]
        let values = {
            let mut values = Array2::zeros(grid.shape());
            Zip::indexed(&mut values).par_for_each(|(i, j), v| *v = property(t[i], p[j]));
            values
        };

        Self {
            grid: grid.clone(),
            values,
        }
    }

    pub fn grid(&self) -> &TabulationGrid {
        &self.grid
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Bilinear interpolation, or `None` if the state is outside of the grid.
    pub fn interpolate<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> Option<D> {
        let grid = &self.grid;
        let (i, j) = grid.cell(temperature.re(), pressure.re())?;
        let (t0, t1) = (grid.temperature[i], grid.temperature[i + 1]);
        let (p0, p1) = (grid.pressure[j], grid.pressure[j + 1]);
        let a = (temperature - t0) / (t1 - t0);
        let b = (pressure - p0) / (p1 - p0);
        let one = D::from(1.0);

        let v = &self.values;
        Some(
            (one - a) * (one - b) * v[[i, j]]
                + a * (one - b) * v[[i + 1, j]]
                + (one - a) * b * v[[i, j + 1]]
                + a * b * v[[i + 1, j + 1]],
        )
    }
}

/// A substance whose properties are interpolated from tables.
///
/// Only properties that were tabulated explicitly using the `with_*`
/// methods are interpolated, all other properties and all states
/// outside of the grid are evaluated by the wrapped substance.
///
/// # Example
/// ```
/// # use matprop::components::N2;
/// # use matprop::tabulated::{TabulatedComponent, TabulationGrid};
/// # use matprop_core::{GasViscosity, MaterialResult};
/// # fn main() -> MaterialResult<()> {
/// let grid = TabulationGrid::new(250.0, 450.0, 201, 1e4, 1e7, 11)?;
/// let n2 = TabulatedComponent::new(N2, grid).with_gas_viscosity();
/// let mu = n2.gas_viscosity(300.5, 2e5);
/// let mu_direct = N2.gas_viscosity(300.5, 2e5);
/// assert!((mu - mu_direct).abs() < 1e-6 * mu_direct);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TabulatedComponent<C> {
    component: C,
    grid: TabulationGrid,
    verbosity: Verbosity,
    liquid_density: Option<PropertyTable>,
    liquid_viscosity: Option<PropertyTable>,
    gas_density: Option<PropertyTable>,
    gas_viscosity: Option<PropertyTable>,
}

impl<C: Component> TabulatedComponent<C> {
    pub fn new(component: C, grid: TabulationGrid) -> Self {
        Self {
            component,
            grid,
            verbosity: Verbosity::None,
            liquid_density: None,
            liquid_viscosity: None,
            gas_density: None,
            gas_viscosity: None,
        }
    }

    /// Set the verbosity of the subsequent tabulations.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// The wrapped substance.
    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn grid(&self) -> &TabulationGrid {
        &self.grid
    }

    fn tabulate<F>(&self, property: &str, f: F) -> PropertyTable
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let (nt, np) = self.grid.shape();
        log_result!(
            self.verbosity,
            "Tabulating {} of {} on {} x {} grid",
            property,
            self.component.name(),
            nt,
            np
        );
        let table = PropertyTable::tabulate(&self.grid, f);
        let values = table.values();
        log_iter!(
            self.verbosity,
            "    min = {:>12.5e} | max = {:>12.5e}",
            values.fold(f64::INFINITY, |a, &b| a.min(b)),
            values.fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        );
        table
    }
}

impl<C: LiquidDensity> TabulatedComponent<C> {
    pub fn with_liquid_density(mut self) -> Self {
        let table = self.tabulate("liquid density", |t, p| self.component.liquid_density(t, p));
        self.liquid_density = Some(table);
        self
    }
}

impl<C: LiquidViscosity> TabulatedComponent<C> {
    pub fn with_liquid_viscosity(mut self) -> Self {
        let table = self.tabulate("liquid viscosity", |t, p| {
            self.component.liquid_viscosity(t, p)
        });
        self.liquid_viscosity = Some(table);
        self
    }
}

impl<C: GasDensity> TabulatedComponent<C> {
    pub fn with_gas_density(mut self) -> Self {
        let table = self.tabulate("gas density", |t, p| self.component.gas_density(t, p));
        self.gas_density = Some(table);
        self
    }
}

impl<C: GasViscosity> TabulatedComponent<C> {
    pub fn with_gas_viscosity(mut self) -> Self {
        let table = self.tabulate("gas viscosity", |t, p| self.component.gas_viscosity(t, p));
        self.gas_viscosity = Some(table);
        self
    }
}

impl<C: Component> Component for TabulatedComponent<C> {
    fn name(&self) -> &'static str {
        self.component.name()
    }
}

impl<C: LiquidDensity> LiquidDensity for TabulatedComponent<C> {
    fn liquid_density<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D {
        self.liquid_density
            .as_ref()
            .and_then(|table| table.interpolate(temperature, pressure))
            .unwrap_or_else(|| self.component.liquid_density(temperature, pressure))
    }
}

impl<C: LiquidViscosity> LiquidViscosity for TabulatedComponent<C> {
    fn liquid_viscosity<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D {
        self.liquid_viscosity
            .as_ref()
            .and_then(|table| table.interpolate(temperature, pressure))
            .unwrap_or_else(|| self.component.liquid_viscosity(temperature, pressure))
    }
}

impl<C: GasDensity> GasDensity for TabulatedComponent<C> {
    fn gas_density<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D {
        self.gas_density
            .as_ref()
            .and_then(|table| table.interpolate(temperature, pressure))
            .unwrap_or_else(|| self.component.gas_density(temperature, pressure))
    }
}

impl<C: GasViscosity> GasViscosity for TabulatedComponent<C> {
    fn gas_viscosity<D: DualNum<f64> + Copy>(&self, temperature: D, pressure: D) -> D {
        self.gas_viscosity
            .as_ref()
            .and_then(|table| table.interpolate(temperature, pressure))
            .unwrap_or_else(|| self.component.gas_viscosity(temperature, pressure))
    }
}
