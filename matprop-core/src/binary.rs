use crate::{MaterialError, MaterialResult};
use indexmap::IndexMap;
use num_dual::*;
use std::fmt;
use std::sync::Arc;

/// Coefficients describing the interaction of two substances that can
/// be evaluated using generalized (hyper) dual numbers.
///
/// This trait needs to be implemented generically or for the specific
/// types in the supertraits of [BinaryCoefficients] so that the
/// implementor can be stored in a [BinaryCoefficientsRegistry].
pub trait BinaryCoefficientsDual<D: DualNum<f64>> {
    /// Henry coefficient in Pa of the solute in the liquid solvent at
    /// `temperature` in K.
    fn henry(&self, temperature: D) -> D;

    /// Binary diffusion coefficient in m²/s of the gas phase at
    /// `temperature` in K and `pressure` in Pa.
    fn gas_diff_coeff(&self, temperature: D, pressure: D) -> D;

    /// Diffusion coefficient in m²/s of the solute in the liquid phase
    /// at `temperature` in K and `pressure` in Pa.
    fn liquid_diff_coeff(&self, temperature: D, pressure: D) -> D;
}

/// Object safe version of the [BinaryCoefficientsDual] trait.
pub trait BinaryCoefficients:
    BinaryCoefficientsDual<f64>
    + BinaryCoefficientsDual<Dual64>
    + BinaryCoefficientsDual<Dual2_64>
    + BinaryCoefficientsDual<Dual3_64>
    + BinaryCoefficientsDual<HyperDual64>
    + BinaryCoefficientsDual<DualSVec64<2>>
    + BinaryCoefficientsDual<DualSVec64<3>>
    + fmt::Display
    + Send
    + Sync
{
    /// The pair of substances the coefficients are calibrated for.
    fn substances(&self) -> SubstancePair;
}

/// Unordered pair of substance names.
///
/// The names are stored in lexicographic order, so the pair is
/// independent of the order in which the substances are given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubstancePair([String; 2]);

impl SubstancePair {
    pub fn new(substance1: &str, substance2: &str) -> Self {
        let (a, b) = if substance1 <= substance2 {
            (substance1, substance2)
        } else {
            (substance2, substance1)
        };
        Self([a.to_string(), b.to_string()])
    }

    /// The names of both substances in lexicographic order.
    pub fn names(&self) -> (&str, &str) {
        (&self.0[0], &self.0[1])
    }

    pub fn contains(&self, substance: &str) -> bool {
        self.0.iter().any(|s| s == substance)
    }

    fn is_homogeneous(&self) -> bool {
        self.0[0] == self.0[1]
    }
}

impl fmt::Display for SubstancePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

/// Lookup of binary coefficient calculators by substance pair.
///
/// New substance pairs are added by registering another calculator;
/// existing calculators are never replaced.
#[derive(Clone, Default)]
pub struct BinaryCoefficientsRegistry {
    calculators: IndexMap<SubstancePair, Arc<dyn BinaryCoefficients>>,
}

impl BinaryCoefficientsRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of calculators.
    pub fn from_calculators(
        calculators: Vec<Arc<dyn BinaryCoefficients>>,
    ) -> MaterialResult<Self> {
        let mut registry = Self::new();
        for calculator in calculators {
            registry.register(calculator)?;
        }
        Ok(registry)
    }

    /// Add a calculator for the substance pair it reports.
    pub fn register(&mut self, calculator: Arc<dyn BinaryCoefficients>) -> MaterialResult<()> {
        let pair = calculator.substances();
        if pair.is_homogeneous() {
            return Err(MaterialError::IdenticalSubstances(pair.0[0].clone()));
        }
        if self.calculators.contains_key(&pair) {
            return Err(MaterialError::DuplicatePair(pair));
        }
        self.calculators.insert(pair, calculator);
        Ok(())
    }

    /// Return the calculator for the given substances in any order.
    pub fn get(&self, substance1: &str, substance2: &str) -> MaterialResult<&dyn BinaryCoefficients> {
        let pair = SubstancePair::new(substance1, substance2);
        match self.calculators.get(&pair) {
            Some(calculator) => Ok(calculator.as_ref()),
            None => Err(MaterialError::UnknownPair(pair)),
        }
    }

    pub fn contains(&self, substance1: &str, substance2: &str) -> bool {
        self.calculators
            .contains_key(&SubstancePair::new(substance1, substance2))
    }

    /// All registered substance pairs in the order of registration.
    pub fn pairs(&self) -> impl Iterator<Item = &SubstancePair> {
        self.calculators.keys()
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }
}

impl fmt::Debug for BinaryCoefficientsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.calculators
                    .iter()
                    .map(|(pair, calculator)| (pair.to_string(), calculator.to_string())),
            )
            .finish()
    }
}
