use crate::model::types::{OxidationStateSet, ValenceMode};

/// Default ceiling on the number of candidate assignments.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 5000;

/// Configuration for composition screening.
///
/// # Examples
///
/// ```
/// use valence_forge::{OxidationStateSet, ScreenConfig};
///
/// let strict = ScreenConfig::default();
/// assert!(strict.use_pauling_test);
///
/// let relaxed = ScreenConfig {
///     oxidation_states: OxidationStateSet::Smact14,
///     use_pauling_test: false,
///     max_combinations: 1_000_000,
///     ..Default::default()
/// };
/// assert_eq!(relaxed.oxidation_states.key(), "smact14");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Reference set supplying admissible oxidation states.
    pub oxidation_states: OxidationStateSet,

    /// Whether neutral assignments must also pass the electronegativity
    /// ordering test.
    pub use_pauling_test: bool,

    /// Upper bound on the candidate search space. Compositions whose
    /// search space is larger are reported as indeterminate without
    /// enumerating anything.
    pub max_combinations: u64,

    /// Whether atoms of one element may take different oxidation states.
    pub valence_mode: ValenceMode,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            oxidation_states: OxidationStateSet::Icsd24,
            use_pauling_test: true,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            valence_mode: ValenceMode::Mixed,
        }
    }
}
