use super::ParameterError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A named set of calibrated parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Record<M> {
    pub name: String,
    pub model_record: M,
}

impl<M> Record<M> {
    /// Create a new `Record`.
    pub fn new(name: &str, model_record: M) -> Self {
        Self {
            name: name.to_string(),
            model_record,
        }
    }

    /// Read the queried records from a json file.
    ///
    /// The records are returned in the order of `names`.
    pub fn from_json<P>(names: &[&str], file: P) -> Result<Vec<Self>, ParameterError>
    where
        P: AsRef<Path>,
        M: DeserializeOwned,
    {
        // create list of records
        let mut queried: HashSet<String> = names.iter().map(|s| s.to_string()).collect();
        // raise error on duplicate detection
        if queried.len() != names.len() {
            return Err(ParameterError::IncompatibleParameters(
                "A record was queried more than once.".to_string(),
            ));
        }

        let f = File::open(file)?;
        let reader = BufReader::new(f);
        let file_records: Vec<Self> = serde_json::from_reader(reader)?;
        let mut records: HashMap<String, Self> = HashMap::with_capacity(names.len());

        // build map, draining list of queried records in the process
        for record in file_records {
            if let Some(name) = queried.take(&record.name) {
                records.insert(name, record);
            }
            if queried.is_empty() {
                break;
            }
        }

        // report missing parameters
        if !queried.is_empty() {
            let mut missing: Vec<_> = queried.into_iter().collect();
            missing.sort();
            return Err(ParameterError::ComponentsNotFound(missing.join(", ")));
        };

        // collect into vec in correct order
        Ok(names
            .iter()
            .filter_map(|&name| records.remove(name))
            .collect())
    }
}

impl<M> std::fmt::Display for Record<M>
where
    M: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record(")?;
        write!(f, "\n\tname={},", self.name)?;
        write!(f, "\n\tmodel_record={},", self.model_record)?;
        write!(f, "\n)")
    }
}
