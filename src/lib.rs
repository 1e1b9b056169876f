//! Charge-neutrality screening of chemical compositions with mixed-valence
//! oxidation states.
//!
//! Given a formula such as `Fe3O4`, the library decides whether its atoms can
//! be assigned oxidation states that sum to zero when atoms of the same
//! element may sit in different states (Fe²⁺ and Fe³⁺ in magnetite), and
//! whether at least one such assignment respects electronegativity ordering.
//!
//! # Features
//!
//! - **Composition parsing** — Element symbols with optional counts, repeated
//!   symbols accumulated
//! - **Reference data** — Embedded Pauling electronegativities and five named
//!   oxidation state sets (`smact14`, `icsd16`, `icsd24`, `pymatgen_sp`,
//!   `wiki`), or a custom TOML table
//! - **Bounded enumeration** — Lazy per-atom search guarded by a
//!   combinatorial ceiling
//! - **Plausibility filter** — Pauling-style electronegativity ordering test
//! - **Typed diagnostics** — Tri-state verdicts and explicit advisories
//!   instead of silent failures
//!
//! # Quick Start
//!
//! ```
//! use valence_forge::{Composition, ScreenConfig, ScreenError, Verdict, is_valid, screen};
//!
//! let config = ScreenConfig::default();
//!
//! // Magnetite needs one Fe2+ and two Fe3+.
//! assert!(is_valid("Fe3O4", &config)?);
//! assert!(!is_valid("Fe3O5", &config)?);
//!
//! let magnetite: Composition = "Fe3O4".parse()?;
//! let report = screen(&magnetite, &config)?;
//! assert_eq!(report.verdict, Verdict::Valid);
//!
//! let witness = report.witness.expect("valid compositions carry a witness");
//! assert_eq!(witness.len(), 7);
//! assert!(witness.is_neutral());
//!
//! // A ceiling below the search size gives an indeterminate result.
//! let tight = ScreenConfig { max_combinations: 4, ..Default::default() };
//! let report = screen(&magnetite, &tight)?;
//! assert_eq!(report.verdict, Verdict::Indeterminate);
//! assert!(report.ceiling_exceeded());
//! # Ok::<(), ScreenError>(())
//! ```
//!
//! # Data Types
//!
//! - [`Composition`] — Ordered element symbols and atom counts
//! - [`OxidationAssignment`] — Per-atom oxidation states
//! - [`ElementTable`] / [`ElementData`] — Reference electronegativity and
//!   oxidation states
//! - [`OxidationStateSet`] — Selects a named reference set
//! - [`DataQuality`] — Confidence tier of the selected set
//! - [`ValenceMode`] — Mixed (per-atom) or uniform (per-element) states
//!
//! # Results
//!
//! - [`Report`] — Verdict, witness assignment, search size, and advisories
//! - [`Verdict`] — Valid, invalid, or indeterminate
//! - [`Advisory`] — Non-fatal diagnostics (ceiling exceeded, questionable data)
//! - [`Enumeration`] — Every neutral assignment, for inspection

mod model;
mod screen;

pub use model::assignment::{GroupedAssignment, OxidationAssignment};
pub use model::composition::{Composition, ParseCompositionError};
pub use model::element::ElementData;
pub use model::types::{DataQuality, OxidationStateSet, ParseOxidationSetError, ValenceMode};

pub use screen::{
    Advisory, DEFAULT_MAX_COMBINATIONS, ElementTable, Enumeration, Report, ScreenConfig,
    SearchSpace, Verdict, atom_electronegativities, enumerate, enumerate_assignments, is_valid,
    pauling_test, screen, screen_with, search_size,
};

pub use screen::Error as ScreenError;
