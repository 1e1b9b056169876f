//! Electronegativity ordering test for oxidation state assignments.
//!
//! Formal charge should fall as electronegativity rises: an atom must not
//! carry a strictly higher oxidation state than any strictly less
//! electronegative atom in the same assignment. Atoms with equal
//! electronegativity (including atoms of the same element) are not
//! compared. This is a screening heuristic, not a stability criterion.

/// Returns `true` if `states` passes the electronegativity ordering test.
///
/// `states` and `electronegativities` are parallel, one entry per atom.
/// Slices of different lengths never pass.
///
/// ```
/// use valence_forge::pauling_test;
///
/// // Fe3+ Fe3+ O2- O2- O2-
/// assert!(pauling_test(&[3, 3, -2, -2, -2], &[1.83, 1.83, 3.44, 3.44, 3.44]));
/// // Oxygen carrying the higher state fails.
/// assert!(!pauling_test(&[-2, 2], &[1.83, 3.44]));
/// ```
pub fn pauling_test(states: &[i32], electronegativities: &[f64]) -> bool {
    if states.len() != electronegativities.len() {
        return false;
    }

    let mut atoms: Vec<(f64, i32)> = electronegativities
        .iter()
        .copied()
        .zip(states.iter().copied())
        .collect();
    atoms.sort_by(|a, b| a.0.total_cmp(&b.0));

    // Lowest state seen among strictly less electronegative atoms.
    let mut lowest_below = i32::MAX;
    for group in atoms.chunk_by(|a, b| a.0 == b.0) {
        if group.iter().any(|&(_, state)| state > lowest_below) {
            return false;
        }
        lowest_below = group
            .iter()
            .map(|&(_, state)| state)
            .fold(lowest_below, i32::min);
    }
    true
}

/// Expands per-element electronegativities to one entry per atom.
pub fn atom_electronegativities(counts: &[u32], electronegativities: &[f64]) -> Vec<f64> {
    counts
        .iter()
        .zip(electronegativities)
        .flat_map(|(&count, &eneg)| std::iter::repeat_n(eneg, count as usize))
        .collect()
}
