use std::collections::BTreeSet;
use std::fmt;

use crate::grid::Cell;

///
/// A logical statement about the board: exactly `count` of `cells` are mines.
///
/// Cells are kept in an ordered set, so two sentences over the same cells and count
/// compare and hash equal regardless of how they were built.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    cells: BTreeSet<Cell>,
    count: i32,
}

impl Sentence {
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: i32) -> Sentence {
        Sentence {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if every cell of self is in other, and other has at least one more.
    pub fn is_strict_subset_of(&self, other: &Sentence) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// If every remaining cell must be a mine, all of them; otherwise nothing.
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if self.count == self.cells.len() as i32 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// If none of the remaining cells can be a mine, all of them; otherwise nothing.
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// The cell is a mine: drop it and account for it in the count.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
        }
    }

    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (i, j)) in self.cells.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({i}, {j})")?;
        }
        write!(f, "}} = {}", self.count)
    }
}
