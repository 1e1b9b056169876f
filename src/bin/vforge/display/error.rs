use std::io::{self, Write};

use anyhow::Error;

use valence_forge::{OxidationStateSet, ParseCompositionError, ScreenError};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_screen_hints(err);
        collector.collect_io_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_screen_hints(&mut self, err: &Error) {
        let Some(screen_err) = err.chain().find_map(|e| e.downcast_ref::<ScreenError>()) else {
            return;
        };

        self.mark_typed();

        match screen_err {
            ScreenError::Configuration(e) => {
                self.add(format!("'{}' is not a known oxidation state set", e.key()));
                let keys: Vec<&str> = OxidationStateSet::ALL.iter().map(|s| s.key()).collect();
                self.add(format!("Valid sets: {}", keys.join(", ")));
            }

            ScreenError::UnknownElement { symbol } => {
                self.add(format!(
                    "'{}' has no entry in the element table",
                    symbol
                ));
                self.add("Element symbols are case-sensitive (Fe, not FE or fe)");
                self.add("He, Ne and Ar have no entry in the built-in table");
                self.add("Use --table to supply a custom table with extra elements");
            }

            ScreenError::Composition(e) => {
                self.collect_composition_hints(e);
            }

            ScreenError::TableParse(_) => {
                self.add("The custom element table is not valid TOML");
                self.add("Each element needs an [elements.<Symbol>] section with `eneg`");
                self.add("Oxidation states are integer arrays keyed by set name, e.g. icsd24 = [2, 3]");
            }
        }
    }

    fn collect_composition_hints(&mut self, err: &ParseCompositionError) {
        match err {
            ParseCompositionError::Empty => {
                self.add("Provide at least one element symbol, e.g. Fe3O4");
            }

            ParseCompositionError::UnexpectedCharacter { ch, .. } => {
                self.add(format!("'{}' cannot appear in a formula", ch));
                self.add("Formulas are element symbols followed by optional counts");
                self.add("Parentheses, hydrates and fractional counts are not supported; expand them first (Ca(OH)2 → CaO2H2)");
            }

            ParseCompositionError::ZeroCount { symbol } => {
                self.add(format!("Remove '{}' or give it a positive count", symbol));
            }

            ParseCompositionError::CountOverflow { symbol } => {
                self.add(format!(
                    "The count for '{}' does not fit in a 32-bit integer",
                    symbol
                ));
                self.add("Reduce the formula to its smallest formula unit");
            }
        }
    }

    fn collect_io_hints(&mut self, err: &Error) {
        let Some(io_err) = err.chain().find_map(|e| e.downcast_ref::<std::io::Error>()) else {
            return;
        };

        self.mark_typed();

        use std::io::ErrorKind;

        match io_err.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or non-UTF-8 data");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output pipe was closed by the receiving process");
            }

            _ => {}
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Input appears to be from a terminal");
            self.add("Pass formulas as arguments, use -i/--input, or pipe data to stdin");
            return;
        }

        if msg.contains("no formulas") {
            self.add("Input contained only blank or comment lines");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
