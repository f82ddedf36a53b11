use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    bonds::BondCriteria,
    error::{ConfigError, MoleculeError},
    measure::Point,
    molecule::Molecule,
};

/// Represents a full molecule in a config file.
///
/// The name is kept as raw json so that a molecule with a non-string name is reported as
/// a [`MoleculeError`] rather than a parse error.
#[derive(Deserialize)]
pub struct ConfigMolecule {
    name: Value,
    symbols: Vec<String>,
    coordinates: Vec<Vec<f64>>,
    #[serde(default)]
    bond_criteria: BondCriteria,
}

impl ConfigMolecule {
    /// Read a molecule description from a json file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }
}

impl TryFrom<ConfigMolecule> for Molecule {
    type Error = MoleculeError;

    fn try_from(value: ConfigMolecule) -> Result<Self, Self::Error> {
        let ConfigMolecule {
            name,
            symbols,
            coordinates,
            bond_criteria,
        } = value;

        let name = match name {
            Value::String(name) => name,
            other => {
                return Err(MoleculeError::NameNotString {
                    found: json_type_name(&other),
                })
            }
        };

        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(atom, position)| match position.as_slice() {
                &[x, y, z] => Ok(Point::new(x, y, z)),
                _ => Err(MoleculeError::InvalidCoordinate {
                    atom,
                    dimensions: position.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Molecule::with_criteria(
            name,
            symbols,
            coordinates,
            bond_criteria,
        ))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
