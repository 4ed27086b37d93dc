use crate::parameter::ParameterError;
use crate::SubstancePair;
use thiserror::Error;

/// Error type for lookups and setup routines.
///
/// Property functions themselves never fail; errors can only occur
/// while assembling registries, tables or parameter sets.
#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("No binary coefficients registered for {0}.")]
    UnknownPair(SubstancePair),
    #[error("Binary coefficients for {0} are already registered.")]
    DuplicatePair(SubstancePair),
    #[error("A binary pair requires two distinct substances, got `{0}` twice.")]
    IdenticalSubstances(String),
    #[error("Invalid tabulation grid: {0}")]
    InvalidGrid(String),
    #[error(transparent)]
    ParameterError(#[from] ParameterError),
}

/// Convenience type for `Result<T, MaterialError>`.
pub type MaterialResult<T> = Result<T, MaterialError>;
