//! Core rust implementation of lawgen, a crate for synthesizing kinetic laws for reaction
//! networks and Boolean function terms for qualitative models.
//!
//! Reactions are classified by their stoichiometry and the ontology roles of their modifiers,
//! which determines the rate law categories applicable to them. The
//! [`KineticLawGenerator`](submodel::generator::KineticLawGenerator) regenerates the laws of a
//! network on an isolated working copy and merges them back, deduplicating parameters and units.
//! The [`FunctionTermGenerator`](qualitative::generator::FunctionTermGenerator) does the same
//! for the transitions of a qualitative model.

pub mod configuration;
pub mod error;
pub mod io;
pub mod kinetics;
pub mod network;
pub mod ontology;
pub mod qualitative;
pub mod submodel;

pub use configuration::Configuration;
pub use error::DomainError;
pub use network::Network;
