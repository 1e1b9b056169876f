use std::fmt;

use super::composition::Composition;

/// Oxidation states for every individual atom of a composition.
///
/// Atoms are ordered element by element in composition order, so the first
/// `count` entries belong to the first element, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OxidationAssignment {
    states: Vec<i32>,
}

impl OxidationAssignment {
    pub fn new(states: Vec<i32>) -> Self {
        Self { states }
    }

    #[inline]
    pub fn states(&self) -> &[i32] {
        &self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn total_charge(&self) -> i64 {
        self.states.iter().map(|&s| i64::from(s)).sum()
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.total_charge() == 0
    }

    /// Splits the states into one slice per element of `composition`.
    ///
    /// Returns `None` when the assignment length does not match the
    /// composition's atom count.
    pub fn per_element<'c>(&self, composition: &'c Composition) -> Option<Vec<(&'c str, &[i32])>> {
        if composition.atom_count() != self.states.len() {
            return None;
        }
        let mut rest = self.states.as_slice();
        let mut groups = Vec::with_capacity(composition.element_count());
        for (symbol, count) in composition.iter() {
            let (head, tail) = rest.split_at(count as usize);
            groups.push((symbol, head));
            rest = tail;
        }
        Some(groups)
    }

    /// Formats the assignment as `Fe[+3 +3 +2] O[-2 -2 -2 -2]`.
    pub fn display_with<'a>(&'a self, composition: &'a Composition) -> GroupedAssignment<'a> {
        GroupedAssignment {
            assignment: self,
            composition,
        }
    }
}

impl From<Vec<i32>> for OxidationAssignment {
    fn from(states: Vec<i32>) -> Self {
        Self::new(states)
    }
}

impl fmt::Display for OxidationAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_states(f, &self.states)
    }
}

pub struct GroupedAssignment<'a> {
    assignment: &'a OxidationAssignment,
    composition: &'a Composition,
}

impl fmt::Display for GroupedAssignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(groups) = self.assignment.per_element(self.composition) else {
            return write!(f, "{}", self.assignment);
        };
        for (i, (symbol, states)) in groups.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", symbol)?;
            write_states(f, states)?;
        }
        Ok(())
    }
}

fn write_states(f: &mut fmt::Formatter<'_>, states: &[i32]) -> fmt::Result {
    f.write_str("[")?;
    for (i, state) in states.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:+}", state)?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_and_neutrality() {
        let a = OxidationAssignment::new(vec![3, 3, 2, -2, -2, -2, -2]);
        assert_eq!(a.total_charge(), 0);
        assert!(a.is_neutral());
        assert_eq!(a.len(), 7);

        let b = OxidationAssignment::new(vec![3, 3, 3, -2, -2, -2, -2, -2]);
        assert_eq!(b.total_charge(), -1);
        assert!(!b.is_neutral());
    }

    #[test]
    fn splits_per_element() {
        let c: Composition = "Fe3O4".parse().unwrap();
        let a = OxidationAssignment::new(vec![3, 3, 2, -2, -2, -2, -2]);
        let groups = a.per_element(&c).unwrap();
        assert_eq!(groups, vec![("Fe", &[3, 3, 2][..]), ("O", &[-2, -2, -2, -2][..])]);
    }

    #[test]
    fn per_element_rejects_length_mismatch() {
        let c: Composition = "Fe3O4".parse().unwrap();
        let a = OxidationAssignment::new(vec![3, -2]);
        assert!(a.per_element(&c).is_none());
    }

    #[test]
    fn display_formats() {
        let c: Composition = "Fe3O4".parse().unwrap();
        let a = OxidationAssignment::new(vec![3, 3, 2, -2, -2, -2, -2]);
        assert_eq!(a.to_string(), "[+3 +3 +2 -2 -2 -2 -2]");
        assert_eq!(
            a.display_with(&c).to_string(),
            "Fe[+3 +3 +2] O[-2 -2 -2 -2]"
        );
        let zero = OxidationAssignment::new(vec![0]);
        assert_eq!(zero.to_string(), "[+0]");
    }
}
