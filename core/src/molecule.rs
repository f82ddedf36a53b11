use crate::{
    bonds::{build_bond_list, BondCriteria, BondList},
    error::MoleculeError,
    measure::{calculate_distance, checked_angle, Point},
};

/// Represents a molecule: named atoms at fixed positions, and the bonds between them.
///
/// The bond list is rebuilt whenever the coordinates change, so [`Molecule::bonds`]
/// always describes the current geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: String,
    symbols: Vec<String>,
    coordinates: Vec<Point>,
    bond_criteria: BondCriteria,
    bonds: BondList,
}

impl Molecule {
    /// Create a new molecule, using the default bond thresholds.
    pub fn new(name: impl Into<String>, symbols: Vec<String>, coordinates: Vec<Point>) -> Self {
        Self::with_criteria(name, symbols, coordinates, BondCriteria::default())
    }

    pub fn with_criteria(
        name: impl Into<String>,
        symbols: Vec<String>,
        coordinates: Vec<Point>,
        bond_criteria: BondCriteria,
    ) -> Self {
        let name = name.into();
        if symbols.len() != coordinates.len() {
            log::warn!(
                "molecule {name:?} has {} symbols but {} coordinates",
                symbols.len(),
                coordinates.len()
            );
        }

        let bonds = build_bond_list(&coordinates, &bond_criteria);
        Self {
            name,
            symbols,
            coordinates,
            bond_criteria,
            bonds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element label of every atom
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    pub fn num_atoms(&self) -> usize {
        self.coordinates.len()
    }

    pub fn bonds(&self) -> &BondList {
        &self.bonds
    }

    pub fn bond_criteria(&self) -> &BondCriteria {
        &self.bond_criteria
    }

    /// Replace the position of every atom and rebuild the bond list.
    pub fn set_coordinates(&mut self, coordinates: Vec<Point>) {
        self.coordinates = coordinates;
        self.bonds = build_bond_list(&self.coordinates, &self.bond_criteria);
    }

    /// Change the bond thresholds and rebuild the bond list.
    pub fn set_bond_criteria(&mut self, bond_criteria: BondCriteria) {
        self.bond_criteria = bond_criteria;
        self.bonds = build_bond_list(&self.coordinates, &self.bond_criteria);
    }

    /// Compute the bonds of the current geometry under different thresholds. The bond
    /// list stored in this molecule is left untouched.
    pub fn build_bond_list(&self, criteria: &BondCriteria) -> BondList {
        build_bond_list(&self.coordinates, criteria)
    }

    /// Returns the distance between two atoms
    pub fn distance(&self, atom1: usize, atom2: usize) -> Result<f64, MoleculeError> {
        Ok(calculate_distance(self.position(atom1)?, self.position(atom2)?))
    }

    /// Returns the angle between the atoms `atom1`, `vertex` and `atom2`, with `vertex`
    /// at its apex.
    pub fn angle(
        &self,
        atom1: usize,
        vertex: usize,
        atom2: usize,
        degrees: bool,
    ) -> Result<f64, MoleculeError> {
        Ok(checked_angle(
            self.position(atom1)?,
            self.position(vertex)?,
            self.position(atom2)?,
            degrees,
        )?)
    }

    fn position(&self, index: usize) -> Result<&Point, MoleculeError> {
        self.coordinates
            .get(index)
            .ok_or(MoleculeError::AtomIndexOutOfRange {
                index,
                num_atoms: self.num_atoms(),
            })
    }
}
