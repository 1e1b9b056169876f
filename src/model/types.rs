use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "'{0}' is not a valid oxidation state set (expected one of: smact14, icsd16, icsd24, pymatgen_sp, wiki)"
)]
pub struct ParseOxidationSetError(String);

impl ParseOxidationSetError {
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Named reference table of admissible oxidation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OxidationStateSet {
    Smact14,
    Icsd16,
    #[default]
    Icsd24,
    PymatgenSp,
    Wiki,
}

impl OxidationStateSet {
    pub const ALL: [OxidationStateSet; 5] = [
        OxidationStateSet::Smact14,
        OxidationStateSet::Icsd16,
        OxidationStateSet::Icsd24,
        OxidationStateSet::PymatgenSp,
        OxidationStateSet::Wiki,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            OxidationStateSet::Smact14 => "smact14",
            OxidationStateSet::Icsd16 => "icsd16",
            OxidationStateSet::Icsd24 => "icsd24",
            OxidationStateSet::PymatgenSp => "pymatgen_sp",
            OxidationStateSet::Wiki => "wiki",
        }
    }

    pub fn quality(&self) -> DataQuality {
        match self {
            OxidationStateSet::Wiki => DataQuality::Questionable,
            _ => DataQuality::Reference,
        }
    }
}

impl fmt::Display for OxidationStateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OxidationStateSet {
    type Err = ParseOxidationSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smact14" => Ok(OxidationStateSet::Smact14),
            "icsd16" => Ok(OxidationStateSet::Icsd16),
            "icsd24" => Ok(OxidationStateSet::Icsd24),
            "pymatgen_sp" => Ok(OxidationStateSet::PymatgenSp),
            "wiki" => Ok(OxidationStateSet::Wiki),
            _ => Err(ParseOxidationSetError(s.to_string())),
        }
    }
}

/// Confidence tier of an oxidation state set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataQuality {
    /// Curated from crystal structure databases or structure predictors.
    Reference,
    /// Compiled from general references; unsuitable for serious screening.
    Questionable,
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQuality::Reference => write!(f, "Reference"),
            DataQuality::Questionable => write!(f, "Questionable"),
        }
    }
}

/// How oxidation states may be distributed over the atoms of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValenceMode {
    /// Every atom independently takes any admissible state.
    #[default]
    Mixed,
    /// All atoms of an element share a single admissible state.
    Uniform,
}

impl fmt::Display for ValenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValenceMode::Mixed => write!(f, "Mixed"),
            ValenceMode::Uniform => write!(f, "Uniform"),
        }
    }
}
