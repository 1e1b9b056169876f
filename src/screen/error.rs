//! Error types for composition screening.
//!
//! Fatal failures only: parse errors, unknown configuration keys, and
//! missing reference data. Non-fatal conditions such as an exceeded search
//! ceiling are reported as [`Advisory`](super::Advisory) values instead.

use thiserror::Error;

use crate::model::composition::ParseCompositionError;
use crate::model::types::ParseOxidationSetError;

/// Errors that can occur while screening a composition.
#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognized oxidation state set key.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ParseOxidationSetError),

    /// The composition names an element absent from the element table.
    #[error("unknown element '{symbol}': no reference data in the element table")]
    UnknownElement {
        /// The symbol as written in the composition.
        symbol: String,
    },

    /// The formula string could not be decomposed.
    #[error("failed to parse composition: {0}")]
    Composition(#[from] ParseCompositionError),

    /// A custom element table is not valid TOML or does not match the schema.
    #[error("failed to parse element table: {0}")]
    TableParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`UnknownElement`](Error::UnknownElement) error.
    pub fn unknown_element(symbol: impl Into<String>) -> Self {
        Self::UnknownElement {
            symbol: symbol.into(),
        }
    }
}
