//! Brute-force enumeration of charge-neutral oxidation state assignments.
//!
//! The search space is the cross product, over elements, of every way the
//! element's atoms can take its admissible states. Candidates are produced
//! lazily, so memory stays bounded by the size of a single assignment no
//! matter how large the ceiling is.

use itertools::{Either, Itertools};

use super::report::Advisory;
use crate::model::assignment::OxidationAssignment;
use crate::model::types::ValenceMode;

/// Number of candidate assignments for the given per-element counts and
/// admissible states.
///
/// Saturates at `u128::MAX` on overflow. Any element without admissible
/// states makes the space empty.
pub fn search_size(counts: &[u32], states: &[&[i32]], mode: ValenceMode) -> u128 {
    if states.iter().any(|s| s.is_empty()) {
        return 0;
    }
    counts
        .iter()
        .zip(states)
        .try_fold(1u128, |acc, (&count, s)| {
            let per_element = match mode {
                ValenceMode::Mixed => (s.len() as u128).checked_pow(count)?,
                ValenceMode::Uniform => s.len() as u128,
            };
            acc.checked_mul(per_element)
        })
        .unwrap_or(u128::MAX)
}

/// Candidate assignments for one composition.
#[derive(Debug, Clone)]
pub struct SearchSpace<'a> {
    counts: Vec<u32>,
    states: Vec<&'a [i32]>,
    mode: ValenceMode,
}

impl<'a> SearchSpace<'a> {
    /// `counts` and `states` are parallel, one entry per element in
    /// composition order.
    pub fn new(counts: &[u32], states: Vec<&'a [i32]>, mode: ValenceMode) -> Self {
        debug_assert_eq!(counts.len(), states.len());
        Self {
            counts: counts.to_vec(),
            states,
            mode,
        }
    }

    pub fn bound(&self) -> u128 {
        search_size(&self.counts, &self.states, self.mode)
    }

    pub fn atom_count(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Every candidate, charge-neutral or not, in nested order: the first
    /// element's combinations vary slowest and the last atom fastest.
    pub fn candidates(&self) -> impl Iterator<Item = Vec<i32>> + '_ {
        let product = (!self.states.is_empty()).then(|| match self.mode {
            ValenceMode::Mixed => Either::Left(
                self.counts
                    .iter()
                    .zip(&self.states)
                    .flat_map(|(&count, s)| std::iter::repeat_n(*s, count as usize))
                    .map(|s| s.iter().copied())
                    .multi_cartesian_product(),
            ),
            ValenceMode::Uniform => Either::Right(
                self.states
                    .iter()
                    .map(|s| s.iter().copied())
                    .multi_cartesian_product()
                    .map(|per_element| {
                        per_element
                            .into_iter()
                            .zip(&self.counts)
                            .flat_map(|(state, &count)| std::iter::repeat_n(state, count as usize))
                            .collect::<Vec<i32>>()
                    }),
            ),
        });
        product.into_iter().flatten()
    }

    /// Candidates whose oxidation states sum to zero.
    pub fn neutral_assignments(&self) -> impl Iterator<Item = OxidationAssignment> + '_ {
        self.candidates()
            .filter(|states| states.iter().map(|&s| i64::from(s)).sum::<i64>() == 0)
            .map(OxidationAssignment::new)
    }
}

/// Result of an eager enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    /// Charge-neutral assignments in enumeration order.
    pub assignments: Vec<OxidationAssignment>,
    /// Size of the candidate space.
    pub bound: u128,
    /// Set when the space exceeded the ceiling and nothing was enumerated.
    pub advisory: Option<Advisory>,
}

impl Enumeration {
    /// `false` when the ceiling aborted the search.
    pub fn is_exhaustive(&self) -> bool {
        self.advisory.is_none()
    }

    pub(crate) fn collect(space: &SearchSpace<'_>, symbols: &[&str], ceiling: u64) -> Self {
        let bound = space.bound();
        if exceeds(bound, ceiling) {
            let advisory = Advisory::SearchSpaceExceeded { bound, ceiling };
            tracing::warn!(elements = ?symbols, "{}", advisory);
            return Self {
                assignments: Vec::new(),
                bound,
                advisory: Some(advisory),
            };
        }

        let assignments: Vec<_> = space.neutral_assignments().collect();
        tracing::debug!(
            elements = ?symbols,
            bound = %bound,
            neutral = assignments.len(),
            "enumerated oxidation state assignments"
        );
        Self {
            assignments,
            bound,
            advisory: None,
        }
    }
}

#[inline]
pub(crate) fn exceeds(bound: u128, ceiling: u64) -> bool {
    bound > u128::from(ceiling)
}

/// Enumerates every charge-neutral mixed-valence assignment.
///
/// `symbols`, `counts` and `states` are parallel, one entry per element.
/// When the search space is larger than `ceiling`, no candidate is examined
/// and the returned [`Enumeration`] carries an advisory instead.
///
/// ```
/// use valence_forge::enumerate_assignments;
///
/// let result = enumerate_assignments(&["Fe", "O"], &[2, 3], &[&[2, 3], &[-2]], 5000);
/// assert_eq!(result.assignments.len(), 1);
/// assert_eq!(result.assignments[0].states(), &[3, 3, -2, -2, -2]);
/// ```
pub fn enumerate_assignments(
    symbols: &[&str],
    counts: &[u32],
    states: &[&[i32]],
    ceiling: u64,
) -> Enumeration {
    let space = SearchSpace::new(counts, states.to_vec(), ValenceMode::Mixed);
    Enumeration::collect(&space, symbols, ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states_of(result: &Enumeration) -> Vec<Vec<i32>> {
        result
            .assignments
            .iter()
            .map(|a| a.states().to_vec())
            .collect()
    }

    #[test]
    fn search_size_is_product_of_powers() {
        assert_eq!(search_size(&[3, 4], &[&[2, 3], &[-2]], ValenceMode::Mixed), 8);
        assert_eq!(
            search_size(&[2, 3], &[&[1, 2, 3], &[-2, -1]], ValenceMode::Mixed),
            9 * 8
        );
        assert_eq!(
            search_size(&[2, 3], &[&[1, 2, 3], &[-2, -1]], ValenceMode::Uniform),
            6
        );
    }

    #[test]
    fn search_size_saturates_on_overflow() {
        let states: &[i32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert_eq!(search_size(&[200], &[states], ValenceMode::Mixed), u128::MAX);
    }

    #[test]
    fn search_size_is_zero_with_empty_states() {
        let big: &[i32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert_eq!(search_size(&[200, 1], &[big, &[]], ValenceMode::Mixed), 0);
    }

    #[test]
    fn single_element_with_zero_state_is_neutral() {
        let result = enumerate_assignments(&["X"], &[1], &[&[0]], 5000);
        assert_eq!(states_of(&result), vec![vec![0]]);
    }

    #[test]
    fn single_element_without_zero_state_is_not_neutral() {
        let result = enumerate_assignments(&["X"], &[1], &[&[1, 2]], 5000);
        assert!(result.assignments.is_empty());
        assert!(result.is_exhaustive());
    }

    #[test]
    fn magnetite_has_mixed_iron_assignments() {
        let result = enumerate_assignments(&["Fe", "O"], &[3, 4], &[&[2, 3], &[-2]], 5000);
        assert_eq!(
            states_of(&result),
            vec![
                vec![2, 3, 3, -2, -2, -2, -2],
                vec![3, 2, 3, -2, -2, -2, -2],
                vec![3, 3, 2, -2, -2, -2, -2],
            ]
        );
        for a in &result.assignments {
            assert_eq!(a.len(), 7);
            assert_eq!(a.states().iter().filter(|&&s| s == 3).count(), 2);
            assert_eq!(a.states().iter().filter(|&&s| s == 2).count(), 1);
        }
    }

    #[test]
    fn hematite_uses_only_ferric_iron() {
        let result = enumerate_assignments(&["Fe", "O"], &[2, 3], &[&[2, 3], &[-2]], 5000);
        assert_eq!(states_of(&result), vec![vec![3, 3, -2, -2, -2]]);
    }

    #[test]
    fn non_physical_stoichiometry_has_no_assignment() {
        let result = enumerate_assignments(&["Fe", "O"], &[3, 5], &[&[2, 3], &[-2]], 5000);
        assert!(result.assignments.is_empty());
        assert!(result.is_exhaustive());
    }

    #[test]
    fn candidates_follow_nested_order() {
        let space = SearchSpace::new(&[2, 1], vec![&[1, 2], &[-1, -2]], ValenceMode::Mixed);
        let all: Vec<_> = space.candidates().collect();
        assert_eq!(
            all,
            vec![
                vec![1, 1, -1],
                vec![1, 1, -2],
                vec![1, 2, -1],
                vec![1, 2, -2],
                vec![2, 1, -1],
                vec![2, 1, -2],
                vec![2, 2, -1],
                vec![2, 2, -2],
            ]
        );
        assert_eq!(all.len() as u128, space.bound());
    }

    #[test]
    fn duplicate_states_are_not_deduplicated() {
        let result = enumerate_assignments(&["X", "Y"], &[1, 1], &[&[1, 1], &[-1]], 5000);
        assert_eq!(states_of(&result), vec![vec![1, -1], vec![1, -1]]);
    }

    #[test]
    fn ceiling_aborts_before_enumeration() {
        let result = enumerate_assignments(&["Fe", "O"], &[10, 15], &[&[2, 3], &[-2]], 10);
        assert!(result.assignments.is_empty());
        assert_eq!(result.bound, 1024);
        assert_eq!(
            result.advisory,
            Some(Advisory::SearchSpaceExceeded {
                bound: 1024,
                ceiling: 10
            })
        );
        assert!(!result.is_exhaustive());
    }

    #[test]
    fn ceiling_equal_to_bound_is_allowed() {
        let result = enumerate_assignments(&["Fe", "O"], &[3, 4], &[&[2, 3], &[-2]], 8);
        assert!(result.is_exhaustive());
        assert_eq!(result.assignments.len(), 3);
    }

    #[test]
    fn uniform_mode_repeats_state_per_element() {
        let space = SearchSpace::new(&[2, 3], vec![&[2, 3], &[-2]], ValenceMode::Uniform);
        let all: Vec<_> = space.candidates().collect();
        assert_eq!(all, vec![vec![2, 2, -2, -2, -2], vec![3, 3, -2, -2, -2]]);
        let neutral: Vec<_> = space.neutral_assignments().collect();
        assert_eq!(neutral.len(), 1);
        assert_eq!(neutral[0].states(), &[3, 3, -2, -2, -2]);
    }

    #[test]
    fn uniform_mode_rejects_magnetite() {
        let space = SearchSpace::new(&[3, 4], vec![&[2, 3], &[-2]], ValenceMode::Uniform);
        assert_eq!(space.neutral_assignments().count(), 0);
    }

    #[test]
    fn empty_space_yields_nothing() {
        let space = SearchSpace::new(&[], vec![], ValenceMode::Mixed);
        assert_eq!(space.candidates().count(), 0);

        let space = SearchSpace::new(&[2], vec![&[]], ValenceMode::Mixed);
        assert_eq!(space.bound(), 0);
        assert_eq!(space.candidates().count(), 0);
    }
}
