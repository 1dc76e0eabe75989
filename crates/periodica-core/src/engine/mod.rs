//! # Engine Module
//!
//! The resolvers that turn constituent records into composite records.
//!
//! ## Overview
//!
//! Each resolver is a zero-state value holding only a borrowed [`config::Calibration`].
//! Resolution is a pure function of its inputs: the same records always produce
//! the same composite, nothing is cached and no input is mutated.
//!
//! ## Architecture
//!
//! - **Resolvers (`resolvers`)**: [`resolvers::HadronResolver`],
//!   [`resolvers::AtomResolver`] and [`resolvers::MoleculeResolver`], one per
//!   level of the quark → hadron → atom → molecule hierarchy.
//! - **Calibration (`config`)**: the fitted quark-model and nuclear-mass
//!   coefficients, with a validating builder and TOML loading.
//! - **Errors (`error`)**: the [`error::ResolveError`] taxonomy shared by all
//!   resolvers.
//! - **Progress (`progress`)**: a callback-based reporter used by batch workflows.
//!
//! ## Key Capabilities
//!
//! - Exact conservation of charge and baryon number across composition
//! - Semi-empirical nuclear masses from caller-supplied nucleon records
//! - VSEPR geometry, polarity and phase estimates for molecules

pub mod config;
pub mod error;
pub mod progress;
pub mod resolvers;
