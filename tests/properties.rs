use proptest::prelude::*;

use valence_forge::{
    Composition, ElementTable, OxidationStateSet, ScreenConfig, Verdict, enumerate_assignments,
    pauling_test, screen, search_size,
};

/// Pairwise reading of the ordering rule, quadratic in atom count.
fn pauling_pairwise(states: &[i32], enegs: &[f64]) -> bool {
    for i in 0..states.len() {
        for j in 0..states.len() {
            if enegs[i] > enegs[j] && states[i] > states[j] {
                return false;
            }
        }
    }
    true
}

fn small_composition() -> impl Strategy<Value = Composition> {
    let mut symbols = ElementTable::builtin()
        .iter()
        .filter(|(_, data)| !data.icsd24.is_empty())
        .map(|(symbol, _)| symbol.to_string())
        .collect::<Vec<_>>();
    symbols.sort();

    prop::collection::vec((prop::sample::select(symbols), 1u32..=4), 1..=3)
        .prop_map(|pairs| Composition::from_pairs(pairs).unwrap())
}

fn atoms() -> impl Strategy<Value = Vec<(i32, f64)>> {
    prop::collection::vec(
        (-4i32..=7, prop::sample::select(vec![0.79, 1.31, 1.83, 2.2, 3.16, 3.44, 3.98])),
        0..10,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sweep_matches_pairwise_rule(atoms in atoms()) {
        let (states, enegs): (Vec<i32>, Vec<f64>) = atoms.into_iter().unzip();
        prop_assert_eq!(pauling_test(&states, &enegs), pauling_pairwise(&states, &enegs));
    }

    #[test]
    fn screening_is_idempotent(composition in small_composition()) {
        let config = ScreenConfig::default();
        let first = screen(&composition, &config).unwrap();
        let second = screen(&composition, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ceiling_below_bound_never_validates(composition in small_composition()) {
        let full = screen(&composition, &ScreenConfig::default()).unwrap();
        prop_assume!(full.search_size > 1 && !full.ceiling_exceeded());

        let tight = ScreenConfig {
            max_combinations: (full.search_size - 1) as u64,
            ..Default::default()
        };
        let capped = screen(&composition, &tight).unwrap();
        prop_assert_eq!(capped.verdict, Verdict::Indeterminate);
        prop_assert!(!capped.is_valid());
        prop_assert!(capped.ceiling_exceeded());
    }

    #[test]
    fn raising_ceiling_never_invalidates(composition in small_composition(), extra in 0u64..1000) {
        let at_bound = ScreenConfig {
            max_combinations: 4096,
            ..Default::default()
        };
        let higher = ScreenConfig {
            max_combinations: 4096 + extra,
            ..Default::default()
        };
        let low = screen(&composition, &at_bound).unwrap();
        let high = screen(&composition, &higher).unwrap();
        if low.is_valid() {
            prop_assert!(high.is_valid());
        }
    }

    #[test]
    fn valid_witness_passes_every_test(composition in small_composition()) {
        let report = screen(&composition, &ScreenConfig::default()).unwrap();
        if let Some(witness) = &report.witness {
            prop_assert_eq!(witness.len(), composition.atom_count());
            prop_assert!(witness.is_neutral());

            let table = ElementTable::builtin();
            let enegs: Vec<f64> = composition
                .iter()
                .flat_map(|(symbol, count)| {
                    let eneg = table.electronegativity(symbol).unwrap();
                    std::iter::repeat_n(eneg, count as usize)
                })
                .collect();
            prop_assert!(pauling_test(witness.states(), &enegs));
        }
    }

    #[test]
    fn emitted_assignments_are_neutral_and_sized(composition in small_composition()) {
        let table = ElementTable::builtin();
        let symbols: Vec<&str> = composition.symbols().collect();
        let counts = composition.counts();
        let states: Vec<&[i32]> = symbols
            .iter()
            .map(|s| table.oxidation_states(s, OxidationStateSet::Icsd24).unwrap())
            .collect();
        let result = enumerate_assignments(&symbols, &counts, &states, 20_000);

        prop_assert_eq!(result.bound, search_size(&counts, &states, Default::default()));
        for assignment in &result.assignments {
            prop_assert_eq!(assignment.len(), composition.atom_count());
            prop_assert!(assignment.is_neutral());
        }
        if !result.is_exhaustive() {
            prop_assert!(result.assignments.is_empty());
        }
    }
}
