pub use molecule::ConfigMolecule;

mod molecule;
