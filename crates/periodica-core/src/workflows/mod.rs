//! # Workflows Module
//!
//! Multi-step procedures built on the resolvers in [`crate::engine`].
//!
//! ## Overview
//!
//! A workflow strings several resolutions together and reports its progress
//! through a [`crate::engine::progress::ProgressReporter`]. Workflows add no
//! physics of their own: every derived field still comes from one of the
//! resolvers.
//!
//! ## Architecture
//!
//! - **Composition Chain** ([`chain`]) - Up/down quarks to nucleons, nucleons
//!   and electrons to atoms, atoms to a molecule.
//! - **Periodic Table** ([`periodic_table`]) - Every named element built from
//!   the same nucleon and electron records, in parallel when the `parallel`
//!   feature is enabled.

pub mod chain;
pub mod periodic_table;
