//! Molecular geometry: distances, angles and distance-based bond detection.

pub mod bonds;
pub mod config;
pub mod error;
pub mod measure;
pub mod molecule;

pub use bonds::{BondCriteria, BondList};
pub use error::{ConfigError, GeometryError, MoleculeError};
pub use measure::{calculate_angle, calculate_distance, checked_angle, Point};
pub use molecule::Molecule;
