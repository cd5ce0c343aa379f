use std::collections::HashSet;

use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{cell_count, check_bounds, get_neighbors, get_row_col_str, Cell};

/// Ground-truth representation of a game (i.e. where the mines are), plus the mines the
/// player has flagged so far.
#[derive(Debug, Clone)]
pub struct MineMap {
    grid: Vec<Vec<bool>>,
    mines: HashSet<Cell>,
    mines_found: HashSet<Cell>,
}

impl MineMap {
    ///
    /// Generates a new nrows x ncols mine map with nmines mines
    /// distributed across the map uniformly at random.
    ///
    pub fn generate<R: Rng + ?Sized>(nrows: usize, ncols: usize, nmines: usize, rng: &mut R) -> Result<MineMap> {
        let ncells = cell_count(nrows, ncols)?;
        if ncells == 0 {
            return Err(Error::EmptyGrid);
        }
        if nmines > ncells {
            return Err(Error::TooManyMines { nmines, ncells });
        }
        // Selection sampling: walk the cells once in row-major order, taking each one with
        // probability (mines still to place) / (cells still to visit).
        let mut grid: Vec<Vec<bool>> = vec![vec![false; ncols]; nrows];
        let mut n_picked = 0;
        for cell_idx in 0..ncells {
            let n_left_to_pick = (nmines - n_picked) as f64;
            let n_left_to_pick_from = (ncells - cell_idx) as f64;
            if rng.gen_bool(n_left_to_pick / n_left_to_pick_from) {
                grid[cell_idx / ncols][cell_idx % ncols] = true;
                n_picked += 1;
            }
        }
        MineMap::from_rows(grid)
    }

    /// Builds a mine map from a fixed layout, true meaning mine.
    pub fn from_rows(grid: Vec<Vec<bool>>) -> Result<MineMap> {
        let ncols = grid.first().map_or(0, |row| row.len());
        if ncols == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut mines = HashSet::new();
        for (i, row) in grid.iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::RaggedGrid { row: i, expected: ncols, found: row.len() });
            }
            mines.extend(row.iter().enumerate().filter(|(_, is_mine)| **is_mine).map(|(j, _)| (i, j)));
        }
        Ok(MineMap { grid, mines, mines_found: HashSet::new() })
    }

    pub fn get_num_rows(&self) -> usize {
        self.grid.len()
    }

    pub fn get_num_cols(&self) -> usize {
        self.grid[0].len()
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn mines_found(&self) -> &HashSet<Cell> {
        &self.mines_found
    }

    pub fn is_mine(&self, cell: Cell) -> Result<bool> {
        check_bounds(self.get_num_rows(), self.get_num_cols(), cell)?;
        let (i, j) = cell;
        Ok(self.grid[i][j])
    }

    /// Number of mines adjacent to the cell, not counting the cell itself.
    pub fn nearby_mines(&self, cell: Cell) -> Result<usize> {
        check_bounds(self.get_num_rows(), self.get_num_cols(), cell)?;
        let (i, j) = cell;
        Ok(get_neighbors(self.get_num_rows(), self.get_num_cols(), i, j)
            .into_iter()
            .filter(|(ni, nj)| self.grid[*ni][*nj])
            .count())
    }

    /// Flag a cell as a mine. Flags are taken at face value - a wrong flag just means no win.
    pub fn flag(&mut self, cell: Cell) -> Result<()> {
        check_bounds(self.get_num_rows(), self.get_num_cols(), cell)?;
        self.mines_found.insert(cell);
        Ok(())
    }

    /// The game is won once exactly the mines have been flagged.
    pub fn won(&self) -> bool {
        self.mines_found == self.mines
    }

    pub fn to_string(&self) -> String {
        let mut str = get_row_col_str(self.get_num_rows(), self.get_num_cols());
        for row in &self.grid {
            for cell in row {
                str.push_str(if *cell { "x " } else { "- " });
            }
            str.push('\n');
        }
        str
    }
}
