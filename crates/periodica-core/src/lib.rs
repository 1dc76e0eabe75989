//! # Periodica Core Library
//!
//! Derives the properties of composite matter purely from the records of its
//! constituents: quarks combine into hadrons, nucleons and electrons into atoms,
//! and atoms into molecules. Every derived field comes from a physical or
//! semi-empirical formula applied to the input records.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models ([`core::models`]), the
//!   immutable reference tables ([`core::tables`]), the pure formula modules
//!   ([`core::physics`]), idealized geometry helpers and tabular export.
//!
//! - **[`engine`]: The Resolvers.** The hadron, atom and molecule resolvers that
//!   turn constituent records into composite records, their calibration
//!   ([`engine::config`]), error taxonomy and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Multi-step procedures built on the
//!   resolvers, such as the full quark-to-molecule chain and the periodic-table
//!   sweep.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
pub(crate) mod testing;
