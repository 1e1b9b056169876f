//! Core data structures flowing through the screening pipeline.
//!
//! - [`composition`] – Element symbols and atom counts of one formula unit.
//! - [`element`] – Reference electronegativity and oxidation state lists.
//! - [`assignment`] – Per-atom oxidation states for a composition.
//! - [`types`] – Oxidation state set keys, data quality tiers, valence modes.

pub mod assignment;
pub mod composition;
pub mod element;
pub mod types;
