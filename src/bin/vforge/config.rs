use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use valence_forge::{ElementTable, OxidationStateSet, ScreenConfig, ScreenError, ValenceMode};

use crate::cli::ScreenOptions;

pub fn build_screen_config(opts: &ScreenOptions) -> Result<ScreenConfig> {
    let oxidation_states = opts
        .set
        .parse::<OxidationStateSet>()
        .map_err(ScreenError::from)?;

    Ok(ScreenConfig {
        oxidation_states,
        use_pauling_test: !opts.no_pauling,
        max_combinations: opts.max_combinations,
        valence_mode: if opts.uniform {
            ValenceMode::Uniform
        } else {
            ValenceMode::Mixed
        },
    })
}

pub fn load_table(path: Option<&Path>) -> Result<Cow<'static, ElementTable>> {
    match path {
        Some(p) => {
            let source = fs::read_to_string(p)
                .with_context(|| format!("Failed to read element table: {}", p.display()))?;
            let table = ElementTable::from_toml(&source)
                .with_context(|| format!("Invalid element table: {}", p.display()))?;
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(ElementTable::builtin())),
    }
}

pub fn valence_mode_name(config: &ScreenConfig) -> &'static str {
    match config.valence_mode {
        ValenceMode::Mixed => "mixed",
        ValenceMode::Uniform => "uniform",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(set: &str) -> ScreenOptions {
        ScreenOptions {
            set: set.to_string(),
            no_pauling: true,
            max_combinations: 42,
            uniform: true,
            table: None,
        }
    }

    #[test]
    fn maps_options_into_config() {
        let config = build_screen_config(&options("wiki")).unwrap();
        assert_eq!(config.oxidation_states, OxidationStateSet::Wiki);
        assert!(!config.use_pauling_test);
        assert_eq!(config.max_combinations, 42);
        assert_eq!(config.valence_mode, ValenceMode::Uniform);
        assert_eq!(valence_mode_name(&config), "uniform");
    }

    #[test]
    fn unknown_set_is_configuration_error() {
        let err = build_screen_config(&options("nope")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScreenError>(),
            Some(ScreenError::Configuration(_))
        ));
    }

    #[test]
    fn builtin_table_when_no_path() {
        let table = load_table(None).unwrap();
        assert!(matches!(table, Cow::Borrowed(_)));
        assert!(table.contains("Fe"));
    }

    #[test]
    fn missing_table_file_fails() {
        assert!(load_table(Some(Path::new("/nonexistent/elements.toml"))).is_err());
    }
}
