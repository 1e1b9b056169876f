use serde::Deserialize;

use super::types::OxidationStateSet;

/// Reference properties of one element.
///
/// Oxidation state lists keep the order of the source table and may contain
/// repeated values or zero. A set absent from the source table is empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementData {
    /// Pauling electronegativity.
    #[serde(rename = "eneg")]
    pub electronegativity: f64,
    #[serde(default)]
    pub smact14: Vec<i32>,
    #[serde(default)]
    pub icsd16: Vec<i32>,
    #[serde(default)]
    pub icsd24: Vec<i32>,
    #[serde(default)]
    pub pymatgen_sp: Vec<i32>,
    #[serde(default)]
    pub wiki: Vec<i32>,
}

impl ElementData {
    pub fn oxidation_states(&self, set: OxidationStateSet) -> &[i32] {
        match set {
            OxidationStateSet::Smact14 => &self.smact14,
            OxidationStateSet::Icsd16 => &self.icsd16,
            OxidationStateSet::Icsd24 => &self.icsd24,
            OxidationStateSet::PymatgenSp => &self.pymatgen_sp,
            OxidationStateSet::Wiki => &self.wiki,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_list_by_set() {
        let data = ElementData {
            electronegativity: 1.83,
            smact14: vec![1, 2, 3],
            icsd16: vec![2, 3],
            icsd24: vec![3],
            pymatgen_sp: vec![2],
            wiki: vec![0],
        };
        assert_eq!(data.oxidation_states(OxidationStateSet::Smact14), &[1, 2, 3]);
        assert_eq!(data.oxidation_states(OxidationStateSet::Icsd16), &[2, 3]);
        assert_eq!(data.oxidation_states(OxidationStateSet::Icsd24), &[3]);
        assert_eq!(data.oxidation_states(OxidationStateSet::PymatgenSp), &[2]);
        assert_eq!(data.oxidation_states(OxidationStateSet::Wiki), &[0]);
    }

    #[test]
    fn missing_sets_deserialize_empty() {
        let data: ElementData = toml::from_str("eneg = 2.0\nicsd24 = [1]").unwrap();
        assert_eq!(data.electronegativity, 2.0);
        assert_eq!(data.oxidation_states(OxidationStateSet::Icsd24), &[1]);
        assert!(data.oxidation_states(OxidationStateSet::Wiki).is_empty());
    }
}
