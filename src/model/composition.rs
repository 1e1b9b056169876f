use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCompositionError {
    #[error("composition is empty: at least one element is required")]
    Empty,

    #[error("unexpected character '{ch}' at position {position} in composition")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("element '{symbol}' has a zero atom count")]
    ZeroCount { symbol: String },

    #[error("atom count for element '{symbol}' is too large")]
    CountOverflow { symbol: String },
}

/// Element symbols and their atom counts within one formula unit.
///
/// Entries keep the order in which each symbol was first seen. Adding a
/// symbol that is already present accumulates its count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Composition {
    entries: Vec<(String, u32)>,
}

impl Composition {
    /// Builds a composition from already-decomposed `(symbol, count)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ParseCompositionError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut composition = Self::default();
        for (symbol, count) in pairs {
            composition.add(symbol.into(), count)?;
        }
        if composition.is_empty() {
            return Err(ParseCompositionError::Empty);
        }
        Ok(composition)
    }

    fn add(&mut self, symbol: String, count: u32) -> Result<(), ParseCompositionError> {
        if count == 0 {
            return Err(ParseCompositionError::ZeroCount { symbol });
        }
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, existing)) => {
                *existing = existing
                    .checked_add(count)
                    .ok_or(ParseCompositionError::CountOverflow { symbol })?;
            }
            None => self.entries.push((symbol, count)),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), *c))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn counts(&self) -> Vec<u32> {
        self.entries.iter().map(|(_, c)| *c).collect()
    }

    pub fn count_of(&self, symbol: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, c)| *c)
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.entries.len()
    }

    pub fn atom_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Composition {
    type Err = ParseCompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let formula = s.trim();
        let offset = s.len() - s.trim_start().len();
        let bytes = formula.as_bytes();
        let mut composition = Self::default();
        let mut pos = 0;

        while pos < bytes.len() {
            if !bytes[pos].is_ascii_uppercase() {
                let ch = formula[pos..].chars().next().unwrap_or_default();
                return Err(ParseCompositionError::UnexpectedCharacter {
                    ch,
                    position: offset + pos,
                });
            }

            let symbol_start = pos;
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_lowercase() {
                pos += 1;
            }
            let symbol = &formula[symbol_start..pos];

            let digits_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let count = if digits_start == pos {
                1
            } else {
                formula[digits_start..pos].parse::<u32>().map_err(|_| {
                    ParseCompositionError::CountOverflow {
                        symbol: symbol.to_string(),
                    }
                })?
            };

            composition.add(symbol.to_string(), count)?;
        }

        if composition.is_empty() {
            return Err(ParseCompositionError::Empty);
        }
        Ok(composition)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            if count == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}{}", symbol, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(c: &Composition) -> Vec<(&str, u32)> {
        c.iter().collect()
    }

    #[test]
    fn parses_simple_formula() {
        let c: Composition = "Fe3O4".parse().unwrap();
        assert_eq!(pairs(&c), vec![("Fe", 3), ("O", 4)]);
        assert_eq!(c.atom_count(), 7);
        assert_eq!(c.element_count(), 2);
    }

    #[test]
    fn missing_count_defaults_to_one() {
        let c: Composition = "NaCl".parse().unwrap();
        assert_eq!(pairs(&c), vec![("Na", 1), ("Cl", 1)]);
    }

    #[test]
    fn repeated_symbols_accumulate() {
        let c: Composition = "FeOFe2".parse().unwrap();
        assert_eq!(pairs(&c), vec![("Fe", 3), ("O", 1)]);
        assert_eq!(c.count_of("Fe"), Some(3));
    }

    #[test]
    fn multi_digit_counts() {
        let c: Composition = "Fe10O15".parse().unwrap();
        assert_eq!(pairs(&c), vec![("Fe", 10), ("O", 15)]);
    }

    #[test]
    fn unknown_symbols_are_not_rejected_here() {
        let c: Composition = "Xx2Qq".parse().unwrap();
        assert_eq!(pairs(&c), vec![("Xx", 2), ("Qq", 1)]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let c: Composition = "  CuO \n".parse().unwrap();
        assert_eq!(pairs(&c), vec![("Cu", 1), ("O", 1)]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            "".parse::<Composition>().unwrap_err(),
            ParseCompositionError::Empty
        );
        assert_eq!(
            "   ".parse::<Composition>().unwrap_err(),
            ParseCompositionError::Empty
        );
    }

    #[test]
    fn rejects_unexpected_characters() {
        assert_eq!(
            "fe3O4".parse::<Composition>().unwrap_err(),
            ParseCompositionError::UnexpectedCharacter { ch: 'f', position: 0 }
        );
        assert_eq!(
            "Ca(OH)2".parse::<Composition>().unwrap_err(),
            ParseCompositionError::UnexpectedCharacter { ch: '(', position: 2 }
        );
        assert_eq!(
            " Fe 2".parse::<Composition>().unwrap_err(),
            ParseCompositionError::UnexpectedCharacter { ch: ' ', position: 3 }
        );
    }

    #[test]
    fn rejects_zero_count() {
        assert_eq!(
            "Fe0O".parse::<Composition>().unwrap_err(),
            ParseCompositionError::ZeroCount {
                symbol: "Fe".to_string()
            }
        );
    }

    #[test]
    fn rejects_count_overflow() {
        let err = "Fe99999999999".parse::<Composition>().unwrap_err();
        assert!(matches!(err, ParseCompositionError::CountOverflow { .. }));
    }

    #[test]
    fn from_pairs_accumulates_and_validates() {
        let c = Composition::from_pairs([("Fe", 1), ("O", 4), ("Fe", 2)]).unwrap();
        assert_eq!(pairs(&c), vec![("Fe", 3), ("O", 4)]);

        let empty: [(&str, u32); 0] = [];
        assert_eq!(
            Composition::from_pairs(empty).unwrap_err(),
            ParseCompositionError::Empty
        );
        assert!(Composition::from_pairs([("O", 0)]).is_err());
    }

    #[test]
    fn display_omits_unit_counts() {
        let c: Composition = "Fe2O3".parse().unwrap();
        assert_eq!(c.to_string(), "Fe2O3");
        let c: Composition = "NaCl1".parse().unwrap();
        assert_eq!(c.to_string(), "NaCl");
    }
}
