use std::fmt;

use crate::model::assignment::OxidationAssignment;
use crate::model::composition::Composition;
use crate::model::types::{DataQuality, OxidationStateSet};

/// Outcome of screening one composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At least one neutral assignment exists (and passed the
    /// electronegativity test when enabled).
    Valid,
    /// The whole search space was examined and nothing qualified.
    Invalid,
    /// The search space exceeded the ceiling and was not examined.
    Indeterminate,
}

impl Verdict {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid => write!(f, "invalid"),
            Verdict::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Non-fatal diagnostic attached to a screening result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// The candidate space was larger than the configured ceiling.
    SearchSpaceExceeded { bound: u128, ceiling: u64 },
    /// The selected oxidation state set has low data confidence.
    QuestionableData { set: OxidationStateSet },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::SearchSpaceExceeded { bound, ceiling } => write!(
                f,
                "number of possible combinations ({}) exceeds max_combinations ({})",
                bound, ceiling
            ),
            Advisory::QuestionableData { set } => write!(
                f,
                "the '{}' oxidation states may be questionable for serious use",
                set
            ),
        }
    }
}

/// Full result of screening one composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub composition: Composition,
    pub verdict: Verdict,
    /// First assignment that satisfied every enabled test.
    pub witness: Option<OxidationAssignment>,
    /// Whether any charge-neutral assignment was seen before the search
    /// stopped.
    pub neutral_found: bool,
    /// Size of the candidate space.
    pub search_size: u128,
    pub data_quality: DataQuality,
    pub advisories: Vec<Advisory>,
}

impl Report {
    /// The plain boolean answer; indeterminate results count as invalid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    pub fn ceiling_exceeded(&self) -> bool {
        self.advisories
            .iter()
            .any(|a| matches!(a, Advisory::SearchSpaceExceeded { .. }))
    }
}
