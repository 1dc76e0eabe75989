pub mod atom;
pub mod element;
pub mod hadron;
pub mod molecule;
pub mod particle;
