//! # Physics Formulas
//!
//! Pure, closed-form functions behind each resolver. Nothing in here reads a
//! record or fails: inputs arrive as already-validated numbers, and degenerate
//! inputs (no nucleons, zero radius) short-circuit to zero instead of dividing
//! by zero.
//!
//! - [`quark`]: constituent quark model for hadrons.
//! - [`nuclear`]: semi-empirical mass formula, valley of stability, isotopes.
//! - [`orbitals`]: aufbau filling and periodic position.
//! - [`atomic`]: periodic-trend estimates for ionization, size, and bulk properties.
//! - [`vsepr`]: central-atom selection and VSEPR geometry.
//! - [`phase`]: bulk phase properties of molecular substances.

pub mod atomic;
pub mod nuclear;
pub mod orbitals;
pub mod phase;
pub mod quark;
pub mod vsepr;
