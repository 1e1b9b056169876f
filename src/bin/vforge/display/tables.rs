use std::io::{self, Write};

use valence_forge::{ElementData, OxidationStateSet, ScreenConfig};

use crate::config::valence_mode_name;
use crate::util::text::{signed_list, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub valid: usize,
    pub invalid: usize,
    pub indeterminate: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.valid + self.invalid + self.indeterminate
    }
}

pub fn print_screen_summary(config: &ScreenConfig, tally: &Tally) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Oxidation Set", config.oxidation_states.to_string()),
        ("Valence Mode", valence_mode_name(config).to_string()),
        ("Pauling Test", on_off(config.use_pauling_test)),
        ("Ceiling", config.max_combinations.to_string()),
        ("Screened", tally.total().to_string()),
        ("Valid", tally.valid.to_string()),
        ("Invalid", tally.invalid.to_string()),
        ("Indeterminate", tally.indeterminate.to_string()),
    ];

    print_kv_table(&mut out, "Screening Summary", &rows);
}

pub fn print_enumeration_summary(
    formula: &str,
    bound: u128,
    neutral: usize,
    plausible: usize,
) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Composition", formula.to_string()),
        ("Search Space", bound.to_string()),
        ("Neutral", neutral.to_string()),
        ("Plausible", plausible.to_string()),
    ];

    print_kv_table(&mut out, "Enumeration Summary", &rows);
}

pub fn print_element_states(out: &mut impl Write, symbol: &str, data: &ElementData) {
    let set_w = 12usize;
    let sep_overhead = 3;
    let states_w = SAFE_TABLE_WIDTH.saturating_sub(set_w + sep_overhead + 4);

    let title = format!("{} (χ = {:.2})", symbol, data.electronegativity);
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(&title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{s_line}┬{v_line}┐",
        INDENT,
        s_line = "─".repeat(set_w + 2),
        v_line = "─".repeat(states_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<set_w$} │ {:<states_w$} │",
        INDENT,
        "Set",
        "Oxidation States",
    );
    let _ = writeln!(
        out,
        "{}├{s_line}┼{v_line}┤",
        INDENT,
        s_line = "─".repeat(set_w + 2),
        v_line = "─".repeat(states_w + 2)
    );

    for set in OxidationStateSet::ALL {
        let states = signed_list(data.oxidation_states(set));
        let _ = writeln!(
            out,
            "{}│ {:<set_w$} │ {:<states_w$} │",
            INDENT,
            set.key(),
            truncate(&states, states_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{s_line}┴{v_line}┘",
        INDENT,
        s_line = "─".repeat(set_w + 2),
        v_line = "─".repeat(states_w + 2)
    );
}

fn on_off(flag: bool) -> String {
    let label = if flag { "on" } else { "off" };
    label.to_string()
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(out);
}
