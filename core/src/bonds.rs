use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::measure::{calculate_distance, Point};

/// Distance thresholds deciding whether two atoms are bonded. Both bounds are
/// exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondCriteria {
    /// pairs at this distance or further apart are not bonded
    pub max_bond: f64,
    /// pairs at this distance or closer are not bonded
    pub min_bond: f64,
}

impl BondCriteria {
    pub const DEFAULT_MAX_BOND: f64 = 2.93;
    pub const DEFAULT_MIN_BOND: f64 = 0.0;

    pub fn new(max_bond: f64, min_bond: f64) -> Self {
        Self { max_bond, min_bond }
    }

    /// Returns true if two atoms `distance` apart are considered bonded
    pub fn is_bonded(&self, distance: f64) -> bool {
        distance > self.min_bond && distance < self.max_bond
    }
}

impl Default for BondCriteria {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BOND, Self::DEFAULT_MIN_BOND)
    }
}

/// All bonded atom pairs of a molecule, together with their distances.
///
/// Keys are `(atom1, atom2)` with `atom1 < atom2`, iterated in ascending order of
/// `atom1` and then `atom2`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BondList {
    bonds: BTreeMap<(usize, usize), f64>,
}

impl BondList {
    /// Number of bonds
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Returns the length of the bond between two atoms, if they are bonded. The order of
    /// the two indices doesn't matter.
    pub fn get(&self, atom1: usize, atom2: usize) -> Option<f64> {
        self.bonds
            .get(&(atom1.min(atom2), atom1.max(atom2)))
            .copied()
    }

    pub fn contains(&self, atom1: usize, atom2: usize) -> bool {
        self.get(atom1, atom2).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.bonds.iter().map(|(&pair, &distance)| (pair, distance))
    }

    pub fn keys(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bonds.keys().copied()
    }
}

/// Finds all bonded atom pairs by comparing the distance of every pair of atoms against
/// `criteria`.
///
/// An atom is never bonded to itself, whatever the thresholds are.
pub fn build_bond_list(coordinates: &[Point], criteria: &BondCriteria) -> BondList {
    let bonds = (0..coordinates.len())
        .tuple_combinations()
        .filter_map(|(atom1, atom2)| {
            let distance = calculate_distance(&coordinates[atom1], &coordinates[atom2]);
            criteria
                .is_bonded(distance)
                .then_some(((atom1, atom2), distance))
        })
        .collect::<BTreeMap<_, _>>();

    log::debug!(
        "found {} bonds between {} atoms (min {}, max {})",
        bonds.len(),
        coordinates.len(),
        criteria.min_bond,
        criteria.max_bond,
    );

    BondList { bonds }
}
