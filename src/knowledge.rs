use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::grid::{all_cells, check_bounds, get_neighbors, get_row_col_str, Cell};
use crate::sentence::Sentence;

///
/// Terms:
/// move: a cell that has been revealed on the board, and so is known to be safe.
/// safe cell: a cell proven not to be a mine, whether or not it's been revealed yet.
/// mine cell: a cell proven to be a mine.
/// knowledge: every sentence we've been told or have derived, in the order we learned it.
///
/// The sets of moves, safes and mines only ever grow. Sentences are never dropped, though they
/// shrink as their cells get resolved.
///
pub struct KnowledgeBase {
    height: usize,
    width: usize,
    moves_made: HashSet<Cell>,
    safes: HashSet<Cell>,
    mines: HashSet<Cell>,
    knowledge: Vec<Sentence>,
    // Only used to pick random moves.
    pub(crate) rng: StdRng,
}

/// Changes found by scanning a frozen copy of the knowledge.
#[derive(Debug, Default)]
struct Deltas {
    mines: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
    sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    pub fn new(height: usize, width: usize, seed: u64) -> KnowledgeBase {
        KnowledgeBase::with_rng(height, width, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(height: usize, width: usize, rng: StdRng) -> KnowledgeBase {
        KnowledgeBase {
            height,
            width,
            moves_made: HashSet::with_capacity(16),
            safes: HashSet::with_capacity(16),
            mines: HashSet::with_capacity(16),
            knowledge: Vec::with_capacity(16),
            rng,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn moves_made(&self) -> &HashSet<Cell> {
        &self.moves_made
    }

    pub fn safes(&self) -> &HashSet<Cell> {
        &self.safes
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Marks a cell as a mine, and removes it from every sentence we hold.
    pub fn mark_mine(&mut self, cell: Cell) -> Result<()> {
        check_bounds(self.height, self.width, cell)?;
        self.record_mine(cell);
        Ok(())
    }

    /// Marks a cell as safe, and removes it from every sentence we hold.
    pub fn mark_safe(&mut self, cell: Cell) -> Result<()> {
        check_bounds(self.height, self.width, cell)?;
        self.record_safe(cell);
        Ok(())
    }

    fn record_mine(&mut self, cell: Cell) {
        trace!(?cell, "mine");
        self.mines.insert(cell);
        for sentence in self.knowledge.iter_mut() {
            sentence.mark_mine(cell);
        }
    }

    fn record_safe(&mut self, cell: Cell) {
        trace!(?cell, "safe");
        self.safes.insert(cell);
        for sentence in self.knowledge.iter_mut() {
            sentence.mark_safe(cell);
        }
    }

    pub fn neighbours_of(&self, cell: Cell) -> BTreeSet<Cell> {
        let (i, j) = cell;
        get_neighbors(self.height, self.width, i, j).into_iter().collect()
    }

    /// The neighbours of cell, provided cell is on the grid and count could be their mine count.
    fn checked_neighbours(&self, cell: Cell, count: usize) -> Result<BTreeSet<Cell>> {
        check_bounds(self.height, self.width, cell)?;
        let neighbours = self.neighbours_of(cell);
        if count > neighbours.len() {
            return Err(Error::InvalidCount { cell, count, max: neighbours.len() });
        }
        Ok(neighbours)
    }

    ///
    /// Adds a sentence about the still-unknown neighbours of cell. Neighbours we already know to
    /// be mines are taken off the count; neighbours we know to be safe are just left out.
    /// The sentence is added even if no unknown neighbours remain.
    ///
    pub fn add_neighbours_sentence(&mut self, cell: Cell, count: usize) -> Result<()> {
        let neighbours = self.checked_neighbours(cell, count)?;
        // At most 8, so this can't truncate.
        let mut count = count as i32;
        let mut unknown: BTreeSet<Cell> = BTreeSet::new();
        for neighbour in neighbours {
            if self.mines.contains(&neighbour) {
                count -= 1;
            } else if !self.safes.contains(&neighbour) {
                unknown.insert(neighbour);
            }
        }
        let sentence = Sentence::new(unknown, count);
        debug!(?cell, %sentence, "new sentence");
        self.knowledge.push(sentence);
        Ok(())
    }

    ///
    /// Called when the board tells us how many of the neighbours of a revealed cell are mines.
    /// Records the move, adds what it tells us, and then infers everything it can from the
    /// whole of the knowledge.
    ///
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<()> {
        self.checked_neighbours(cell, count)?;
        self.moves_made.insert(cell);
        self.record_safe(cell);
        self.add_neighbours_sentence(cell, count)?;
        let passes = self.infer();
        debug!(
            ?cell,
            count,
            passes,
            sentences = self.knowledge.len(),
            mines = self.mines.len(),
            safes = self.safes.len(),
            "knowledge updated"
        );
        Ok(())
    }

    /// Run inference passes until one of them changes nothing. Returns the number of passes.
    fn infer(&mut self) -> usize {
        let mut passes = 0;
        loop {
            passes += 1;
            let deltas = self.scan();
            if !self.apply(deltas) {
                return passes;
            }
        }
    }

    ///
    /// Look for everything we can conclude from the knowledge as it is right now, without
    /// touching it:
    /// 1. a sentence whose count is 0 makes all its cells safe, and one whose count equals its
    ///    size makes all of its cells mines.
    /// 2. if s1 is a strict subset of s2, then the cells only in s2 contain exactly
    ///    s2.count - s1.count mines.
    ///
    fn scan(&self) -> Deltas {
        let mut deltas = Deltas::default();
        for sentence in &self.knowledge {
            deltas.mines.extend(sentence.known_mines());
            deltas.safes.extend(sentence.known_safes());
        }

        // The ordered cell set makes each sentence its own normalised key.
        let mut seen: HashSet<Sentence> = self.knowledge.iter().cloned().collect();
        for (idx1, s1) in self.knowledge.iter().enumerate() {
            if s1.len() <= 1 {
                continue;
            }
            for (idx2, s2) in self.knowledge.iter().enumerate() {
                if idx1 == idx2 || !s1.is_strict_subset_of(s2) {
                    continue;
                }
                let derived = Sentence::new(
                    s2.cells().difference(s1.cells()).copied(),
                    s2.count() - s1.count(),
                );
                if seen.insert(derived.clone()) {
                    deltas.sentences.push(derived);
                }
            }
        }
        deltas
    }

    /// Apply the deltas from a scan, and return whether anything changed.
    fn apply(&mut self, deltas: Deltas) -> bool {
        let mut changed = !deltas.sentences.is_empty();
        for sentence in deltas.sentences {
            debug!(%sentence, "derived sentence");
            self.knowledge.push(sentence);
        }
        // New sentences may mention these cells too, so mark after appending.
        for cell in deltas.mines {
            changed |= !self.mines.contains(&cell);
            self.record_mine(cell);
        }
        for cell in deltas.safes {
            changed |= !self.safes.contains(&cell);
            self.record_safe(cell);
        }
        changed
    }

    ///
    /// Debug view of what we know:
    /// x: known mine, o: revealed, .: known safe but not revealed yet, -: unknown
    ///
    pub fn pretty_print(&self) -> String {
        let mut str = get_row_col_str(self.height, self.width);
        for cell in all_cells(self.height, self.width) {
            let symbol = if self.mines.contains(&cell) {
                "x "
            } else if self.moves_made.contains(&cell) {
                "o "
            } else if self.safes.contains(&cell) {
                ". "
            } else {
                "- "
            };
            str.push_str(symbol);
            if cell.1 + 1 == self.width {
                str.push('\n');
            }
        }
        str
    }
}
