mod config;
mod enumerate;
mod error;
mod pauling;
mod report;
mod table;

pub use config::{DEFAULT_MAX_COMBINATIONS, ScreenConfig};
pub use enumerate::{Enumeration, SearchSpace, enumerate_assignments, search_size};
pub use error::Error;
pub use pauling::{atom_electronegativities, pauling_test};
pub use report::{Advisory, Report, Verdict};
pub use table::ElementTable;

use crate::model::composition::Composition;
use crate::model::types::{DataQuality, OxidationStateSet};

/// Per-element reference data resolved once before any enumeration.
struct ResolvedComposition<'t> {
    symbols: Vec<&'t str>,
    counts: Vec<u32>,
    states: Vec<&'t [i32]>,
    electronegativities: Vec<f64>,
}

impl<'t> ResolvedComposition<'t> {
    fn resolve(
        composition: &'t Composition,
        set: OxidationStateSet,
        table: &'t ElementTable,
    ) -> Result<Self, Error> {
        let mut resolved = Self {
            symbols: Vec::with_capacity(composition.element_count()),
            counts: Vec::with_capacity(composition.element_count()),
            states: Vec::with_capacity(composition.element_count()),
            electronegativities: Vec::with_capacity(composition.element_count()),
        };
        for (symbol, count) in composition.iter() {
            let data = table.get(symbol)?;
            resolved.symbols.push(symbol);
            resolved.counts.push(count);
            resolved.states.push(data.oxidation_states(set));
            resolved.electronegativities.push(data.electronegativity);
        }
        Ok(resolved)
    }

    fn search_space(&self, config: &ScreenConfig) -> SearchSpace<'t> {
        SearchSpace::new(&self.counts, self.states.clone(), config.valence_mode)
    }
}

fn data_quality_advisories(config: &ScreenConfig) -> Vec<Advisory> {
    let set = config.oxidation_states;
    if set.quality() == DataQuality::Questionable {
        let advisory = Advisory::QuestionableData { set };
        tracing::warn!("{}", advisory);
        vec![advisory]
    } else {
        Vec::new()
    }
}

/// Decides whether `formula` admits a plausible charge-neutral assignment,
/// using the embedded element table.
///
/// Compositions whose search space exceeds the ceiling report `false`; use
/// [`screen`] to tell them apart from definitive negatives.
///
/// # Errors
///
/// Returns [`Error`] if the formula cannot be parsed or names an element
/// absent from the table.
pub fn is_valid(formula: &str, config: &ScreenConfig) -> Result<bool, Error> {
    let composition: Composition = formula.parse()?;
    Ok(screen(&composition, config)?.is_valid())
}

/// Screens a composition against the embedded element table.
pub fn screen(composition: &Composition, config: &ScreenConfig) -> Result<Report, Error> {
    screen_with(composition, config, ElementTable::builtin())
}

/// Screens a composition against a caller-supplied element table.
///
/// Neutral assignments are generated lazily and the search stops at the
/// first one that passes every enabled test.
///
/// # Errors
///
/// Returns [`Error::UnknownElement`] if any element of the composition is
/// missing from `table`.
pub fn screen_with(
    composition: &Composition,
    config: &ScreenConfig,
    table: &ElementTable,
) -> Result<Report, Error> {
    let mut advisories = data_quality_advisories(config);
    let resolved = ResolvedComposition::resolve(composition, config.oxidation_states, table)?;
    let space = resolved.search_space(config);
    let search_size = space.bound();

    let mut report = Report {
        composition: composition.clone(),
        verdict: Verdict::Indeterminate,
        witness: None,
        neutral_found: false,
        search_size,
        data_quality: config.oxidation_states.quality(),
        advisories: Vec::new(),
    };

    if enumerate::exceeds(search_size, config.max_combinations) {
        let advisory = Advisory::SearchSpaceExceeded {
            bound: search_size,
            ceiling: config.max_combinations,
        };
        tracing::warn!(composition = %composition, "{}", advisory);
        advisories.push(advisory);
        report.advisories = advisories;
        return Ok(report);
    }

    let atom_enegs = atom_electronegativities(&resolved.counts, &resolved.electronegativities);
    for assignment in space.neutral_assignments() {
        report.neutral_found = true;
        if !config.use_pauling_test || pauling_test(assignment.states(), &atom_enegs) {
            report.witness = Some(assignment);
            break;
        }
    }

    report.verdict = if report.witness.is_some() {
        Verdict::Valid
    } else {
        Verdict::Invalid
    };
    report.advisories = advisories;

    tracing::debug!(
        composition = %composition,
        set = %config.oxidation_states,
        search_size = %search_size,
        neutral_found = report.neutral_found,
        verdict = %report.verdict,
        "screened composition"
    );

    Ok(report)
}

/// Lists every charge-neutral assignment of `composition` for inspection.
///
/// The electronegativity test is not applied; combine with
/// [`pauling_test`] and [`atom_electronegativities`] to check individual
/// assignments. The data-quality advisory, if any, is logged but the
/// returned [`Enumeration`] only carries the ceiling advisory.
pub fn enumerate(
    composition: &Composition,
    config: &ScreenConfig,
    table: &ElementTable,
) -> Result<Enumeration, Error> {
    data_quality_advisories(config);
    let resolved = ResolvedComposition::resolve(composition, config.oxidation_states, table)?;
    let space = resolved.search_space(config);
    Ok(Enumeration::collect(
        &space,
        &resolved.symbols,
        config.max_combinations,
    ))
}
