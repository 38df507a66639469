use super::cell::Cell;
use std::collections::BTreeSet;
use std::fmt;

/// A set of hospital cells.
///
/// A placement is a value: moving a hospital produces a new placement via
/// [`Placement::with_moved`] and the old one is left untouched. The set is ordered so
/// that iterating it, and therefore every search driven by a seeded generator, is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    hospitals: BTreeSet<Cell>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.hospitals.contains(cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.hospitals.iter()
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.hospitals
    }

    /// Returns the placement obtained by moving the hospital at `from` to `to`.
    ///
    /// Computes `(self \ {from}) ∪ {to}`. The caller is responsible for `to` being a
    /// free cell; if `to` already holds a hospital the result shrinks by one, which the
    /// neighbourhood generator rules out by construction.
    pub fn with_moved(&self, from: Cell, to: Cell) -> Self {
        let mut hospitals = self.hospitals.clone();
        hospitals.remove(&from);
        hospitals.insert(to);
        Self { hospitals }
    }
}

impl FromIterator<Cell> for Placement {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            hospitals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Cell;
    type IntoIter = std::collections::btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.hospitals.iter()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.hospitals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}}")
    }
}
