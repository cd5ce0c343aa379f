use rand::seq::SliceRandom;

use crate::grid::{all_cells, Cell};
use crate::knowledge::KnowledgeBase;

impl KnowledgeBase {
    ///
    /// Returns a cell known to be safe that hasn't been revealed yet, or None if there isn't one.
    /// Picks the smallest such cell (row-major) so games replay the same way.
    ///
    pub fn make_safe_move(&self) -> Option<Cell> {
        self.safes()
            .iter()
            .filter(|cell| !self.moves_made().contains(*cell))
            .min()
            .copied()
    }

    ///
    /// Returns a cell chosen uniformly at random among those that haven't been revealed and
    /// aren't known to be mines, or None if every cell is accounted for.
    ///
    pub fn make_random_move(&mut self) -> Option<Cell> {
        // A grid too big to count can't be fully accounted for.
        let ncells = self.height().checked_mul(self.width());
        if ncells == Some(self.moves_made().len() + self.mines().len()) {
            return None;
        }
        let candidates: Vec<Cell> = all_cells(self.height(), self.width())
            .filter(|cell| !self.moves_made().contains(cell) && !self.mines().contains(cell))
            .collect();
        candidates.choose(&mut self.rng).copied()
    }
}
