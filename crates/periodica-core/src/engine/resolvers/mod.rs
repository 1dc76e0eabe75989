//! The three resolvers, one per level of composition.

pub mod atom;
pub mod hadron;
pub mod molecule;

pub use atom::{AtomConstituents, AtomResolver, AtomSpec};
pub use hadron::HadronResolver;
pub use molecule::MoleculeResolver;
