//! Structures and traits that can be used to build calibrated parameter
//! sets from stored records.

use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;
use thiserror::Error;

mod record;

pub use record::Record;

/// Constructor methods for parameters.
///
/// By implementing `Parameter` for a type, you define how a parameter
/// set is constructed from its model record.
pub trait Parameter
where
    Self: Sized,
{
    type Model: Clone + DeserializeOwned;

    /// Creates parameters from a model record.
    fn from_model_record(model_record: Self::Model) -> Result<Self, ParameterError>;

    /// Creates parameters from a named record stored in a json file.
    fn from_json<P>(name: &str, file: P) -> Result<Self, ParameterError>
    where
        P: AsRef<Path>,
    {
        let mut records = Record::<Self::Model>::from_json(&[name], file)?;
        match records.pop() {
            Some(record) => Self::from_model_record(record.model_record),
            None => Err(ParameterError::ComponentsNotFound(name.to_string())),
        }
    }

    /// Creates one parameter set per queried name from a json file.
    fn from_multiple_json<P>(names: &[&str], file: P) -> Result<Vec<Self>, ParameterError>
    where
        P: AsRef<Path>,
    {
        Record::<Self::Model>::from_json(names, file)?
            .into_iter()
            .map(|r| Self::from_model_record(r.model_record))
            .collect()
    }
}

/// Error type for incomplete parameter information and IO problems.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error(transparent)]
    FileIO(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("The following record(s) were not found: {0}")]
    ComponentsNotFound(String),
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
}
