use matprop_core::constants::REGULARIZATION_THRESHOLD_SW;
use matprop_core::parameter::{Parameter, ParameterError};
use num_dual::DualNum;
use serde::{Deserialize, Serialize};

/// Access to the shape parameters of the Brooks-Corey relation.
pub trait BrooksCoreyParameters<D> {
    /// Entry pressure in Pa.
    fn pe(&self) -> D;

    /// Shape exponent (pore size distribution index).
    fn alpha(&self) -> D;
}

/// Saturation below which a capillary pressure curve is regularized.
pub trait RegularizationThreshold<D>: BrooksCoreyParameters<D> {
    /// Threshold of the wetting phase saturation.
    fn threshold_sw(&self) -> D;
}

/// Parameters of the Brooks-Corey capillary pressure relation.
///
/// Both values are stored as given. Parameters can be dual numbers
/// to obtain derivatives with respect to the parameters themselves.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct BrooksCoreyParams<D = f64> {
    pe: D,
    alpha: D,
}

impl<D: DualNum<f64> + Copy> BrooksCoreyParams<D> {
    pub fn new(pe: D, alpha: D) -> Self {
        Self { pe, alpha }
    }

    /// Parameters without derivatives.
    pub fn re(&self) -> BrooksCoreyParams<f64> {
        BrooksCoreyParams::new(self.pe.re(), self.alpha.re())
    }
}

impl<D: DualNum<f64> + Copy> BrooksCoreyParameters<D> for BrooksCoreyParams<D> {
    fn pe(&self) -> D {
        self.pe
    }

    fn alpha(&self) -> D {
        self.alpha
    }
}

impl Parameter for BrooksCoreyParams<f64> {
    type Model = BrooksCoreyParams<f64>;

    fn from_model_record(model_record: Self::Model) -> Result<Self, ParameterError> {
        Ok(model_record)
    }
}

/// Parameters of the regularized Brooks-Corey capillary pressure
/// relation.
///
/// In addition to the base parameters the regularized relation uses a
/// threshold saturation, which is the same for every instance
/// ([REGULARIZATION_THRESHOLD_SW]).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(transparent)]
pub struct RegularizedBrooksCoreyParams<D = f64>(BrooksCoreyParams<D>);

impl<D: DualNum<f64> + Copy> RegularizedBrooksCoreyParams<D> {
    pub fn new(pe: D, alpha: D) -> Self {
        Self(BrooksCoreyParams::new(pe, alpha))
    }

    /// The parameters of the underlying unregularized relation.
    pub fn base(&self) -> &BrooksCoreyParams<D> {
        &self.0
    }

    /// Parameters without derivatives.
    pub fn re(&self) -> RegularizedBrooksCoreyParams<f64> {
        RegularizedBrooksCoreyParams(self.0.re())
    }
}

impl<D> From<BrooksCoreyParams<D>> for RegularizedBrooksCoreyParams<D> {
    fn from(params: BrooksCoreyParams<D>) -> Self {
        Self(params)
    }
}

impl<D: DualNum<f64> + Copy> BrooksCoreyParameters<D> for RegularizedBrooksCoreyParams<D> {
    fn pe(&self) -> D {
        self.0.pe
    }

    fn alpha(&self) -> D {
        self.0.alpha
    }
}

impl<D: DualNum<f64> + Copy> RegularizationThreshold<D> for RegularizedBrooksCoreyParams<D> {
    fn threshold_sw(&self) -> D {
        D::from(REGULARIZATION_THRESHOLD_SW)
    }
}

impl Parameter for RegularizedBrooksCoreyParams<f64> {
    type Model = BrooksCoreyParams<f64>;

    fn from_model_record(model_record: Self::Model) -> Result<Self, ParameterError> {
        Ok(model_record.into())
    }
}
