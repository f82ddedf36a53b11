use thiserror::Error;

/// Errors raised while building or querying a [`Molecule`](crate::molecule::Molecule).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error("molecule name must be a string, found {found}")]
    NameNotString { found: &'static str },

    #[error("atom {atom} has {dimensions} coordinates, expected 3")]
    InvalidCoordinate { atom: usize, dimensions: usize },

    #[error("atom index {index} is out of range for a molecule with {num_atoms} atoms")]
    AtomIndexOutOfRange { index: usize, num_atoms: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// One of the two arms of an angle has (almost) zero length, so the angle
    /// is undefined.
    #[error("angle is undefined: a point coincides with the vertex")]
    DegenerateAngle,
}

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}
