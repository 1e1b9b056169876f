use std::io::{self, Write};

use anyhow::{Context, Result};

use valence_forge::{
    Composition, Enumeration, OxidationAssignment, ScreenError, atom_electronegativities,
    enumerate, pauling_test,
};

use crate::cli::EnumerateArgs;
use crate::config::{build_screen_config, load_table};
use crate::display::{Context as DisplayContext, print_enumeration_summary};

pub fn run_enumerate(args: EnumerateArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_screen_config(&args.screen)?;
    let table = load_table(args.screen.table.as_deref())?;

    let composition = args
        .formula
        .parse::<Composition>()
        .map_err(ScreenError::from)
        .with_context(|| format!("Failed to parse formula '{}'", args.formula))?;

    let result = enumerate(&composition, &config, &table)
        .with_context(|| format!("Failed to enumerate '{}'", args.formula))?;

    if let Some(advisory) = &result.advisory {
        eprintln!("  \x1b[33m!\x1b[0m {}", advisory);
        eprintln!("    Raise --max-combinations to search this composition.");
        return Ok(());
    }

    let enegs = per_atom_electronegativities(&composition, &table)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut plausible = 0;

    for (i, assignment) in result.assignments.iter().enumerate() {
        let passes = pauling_test(assignment.states(), &enegs);
        if passes {
            plausible += 1;
        }
        if i < limit {
            writeln!(out, "{}", format_line(assignment, &composition, passes))
                .context("Failed to write output")?;
        }
    }
    out.flush().context("Failed to flush output")?;

    if ctx.interactive {
        print_summary(&composition, &result, plausible);
    }

    Ok(())
}

fn per_atom_electronegativities(
    composition: &Composition,
    table: &valence_forge::ElementTable,
) -> Result<Vec<f64>> {
    let enegs = composition
        .symbols()
        .map(|symbol| table.electronegativity(symbol))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(atom_electronegativities(&composition.counts(), &enegs))
}

fn format_line(assignment: &OxidationAssignment, composition: &Composition, passes: bool) -> String {
    let mark = if passes { "pauling" } else { "-" };
    format!("{}\t{}", assignment.display_with(composition), mark)
}

fn print_summary(composition: &Composition, result: &Enumeration, plausible: usize) {
    print_enumeration_summary(
        &composition.to_string(),
        result.bound,
        result.assignments.len(),
        plausible,
    );
}
