use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::StatesArgs;
use crate::config::load_table;
use crate::display::{Context as DisplayContext, print_element_states};
use crate::util::text::signed_list;

use valence_forge::{ElementData, OxidationStateSet};

pub fn run_states(args: StatesArgs, ctx: DisplayContext) -> Result<()> {
    let table = load_table(args.table.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for symbol in &args.symbols {
        let data = table
            .get(symbol)
            .with_context(|| format!("Failed to look up '{}'", symbol))?;

        if ctx.interactive {
            print_element_states(&mut out, symbol, data);
        } else {
            writeln!(out, "{}", format_plain(symbol, data)).context("Failed to write output")?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn format_plain(symbol: &str, data: &ElementData) -> String {
    let mut line = format!("{}\teneg={:.2}", symbol, data.electronegativity);
    for set in OxidationStateSet::ALL {
        line.push_str(&format!("\t{}={}", set.key(), signed_list(data.oxidation_states(set))));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use valence_forge::ElementTable;

    #[test]
    fn plain_line_lists_every_set() {
        let data = ElementTable::builtin().get("O").unwrap();
        let line = format_plain("O", data);
        assert!(line.starts_with("O\teneg=3.44"));
        assert!(line.contains("icsd24=-2"));
        assert_eq!(line.split('\t').count(), 2 + OxidationStateSet::ALL.len());
    }
}
