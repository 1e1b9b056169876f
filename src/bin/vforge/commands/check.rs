use std::io::Write;

use anyhow::{Context, Result, bail};

use valence_forge::{Composition, Report, Verdict, screen_with};

use crate::cli::CheckArgs;
use crate::config::{build_screen_config, load_table};
use crate::display::{Context as DisplayContext, Progress, Tally, print_screen_summary};
use crate::io::{create_output, open_input, read_formulas, stdin_is_tty};

pub fn run_check(args: CheckArgs, ctx: DisplayContext) -> Result<()> {
    let formulas = collect_formulas(&args)?;
    if formulas.is_empty() {
        bail!("No formulas to screen: input contained no formulas");
    }

    let config = build_screen_config(&args.screen)?;
    let table = load_table(args.screen.table.as_deref())?;
    let mut out = create_output(args.io.output.as_deref())?;

    let progress = Progress::new(ctx.interactive, formulas.len());
    let mut tally = Tally::default();

    for formula in &formulas {
        progress.advance(formula);

        let composition = formula
            .parse::<Composition>()
            .map_err(valence_forge::ScreenError::from)
            .with_context(|| format!("Failed to parse formula '{}'", formula))?;
        let report = screen_with(&composition, &config, &table)
            .with_context(|| format!("Failed to screen '{}'", formula))?;

        tally.record(report.verdict);
        writeln!(out, "{}", format_row(formula, &report, args.witness))
            .context("Failed to write output")?;
    }

    out.flush().context("Failed to flush output")?;
    progress.finish("Screening complete");

    if ctx.interactive {
        print_screen_summary(&config, &tally);
    }

    Ok(())
}

fn collect_formulas(args: &CheckArgs) -> Result<Vec<String>> {
    if !args.formulas.is_empty() && args.io.input.is_none() {
        return Ok(args.formulas.clone());
    }

    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No formulas given and stdin is a terminal.\n\nUsage: vforge check <FORMULA>... or pipe one formula per line via stdin."
        );
    }

    let reader = open_input(args.io.input.as_deref())?;
    let mut formulas = args.formulas.clone();
    formulas.extend(read_formulas(reader, args.io.header)?);
    Ok(formulas)
}

fn format_row(formula: &str, report: &Report, witness: bool) -> String {
    let mut row = format!("{}\t{}", formula, report.verdict);
    if witness {
        match &report.witness {
            Some(assignment) => {
                row.push('\t');
                row.push_str(&assignment.display_with(&report.composition).to_string());
            }
            None => row.push_str("\t-"),
        }
    }
    row
}

impl Tally {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Valid => self.valid += 1,
            Verdict::Invalid => self.invalid += 1,
            Verdict::Indeterminate => self.indeterminate += 1,
        }
    }
}
