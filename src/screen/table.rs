use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::error::Error;
use crate::model::element::ElementData;
use crate::model::types::OxidationStateSet;

const BUILTIN_TABLE_TOML: &str = include_str!("../../resources/elements.toml");

static BUILTIN_TABLE: OnceLock<ElementTable> = OnceLock::new();

/// Read-only element reference data keyed by symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementTable {
    #[serde(default)]
    elements: HashMap<String, ElementData>,
}

impl ElementTable {
    /// The embedded table covering most of the periodic table.
    pub fn builtin() -> &'static ElementTable {
        BUILTIN_TABLE.get_or_init(|| {
            toml::from_str(BUILTIN_TABLE_TOML)
                .expect("Failed to parse embedded element table. This is a library bug.")
        })
    }

    /// Parses a custom table with the same schema as the embedded one.
    ///
    /// ```
    /// use valence_forge::{ElementTable, OxidationStateSet};
    ///
    /// let table = ElementTable::from_toml(r#"
    ///     [elements.X]
    ///     eneg = 1.5
    ///     icsd24 = [0]
    /// "#)?;
    /// assert_eq!(table.oxidation_states("X", OxidationStateSet::Icsd24)?, &[0]);
    /// # Ok::<(), valence_forge::ScreenError>(())
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    pub fn get(&self, symbol: &str) -> Result<&ElementData, Error> {
        self.elements
            .get(symbol)
            .ok_or_else(|| Error::unknown_element(symbol))
    }

    pub fn oxidation_states(&self, symbol: &str, set: OxidationStateSet) -> Result<&[i32], Error> {
        Ok(self.get(symbol)?.oxidation_states(set))
    }

    pub fn electronegativity(&self, symbol: &str) -> Result<f64, Error> {
        Ok(self.get(symbol)?.electronegativity)
    }

    /// Iterates over `(symbol, data)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementData)> {
        self.elements.iter().map(|(s, d)| (s.as_str(), d))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
