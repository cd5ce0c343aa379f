//! Common grid functions

use crate::error::{Error, Result};

/// A (row, col) coordinate on the grid.
pub type Cell = (usize, usize);

pub fn in_bounds(height: usize, width: usize, cell: Cell) -> bool {
    let (i, j) = cell;
    i < height && j < width
}

/// Reject a cell that lies outside a height x width grid.
pub fn check_bounds(height: usize, width: usize, cell: Cell) -> Result<()> {
    if in_bounds(height, width, cell) {
        Ok(())
    } else {
        Err(Error::OutOfBounds { cell, height, width })
    }
}

/// Number of cells in a height x width grid.
pub fn cell_count(height: usize, width: usize) -> Result<usize> {
    height.checked_mul(width).ok_or(Error::GridTooLarge { height, width })
}

///
/// Returns the (up to 8) cells adjacent to i,j, clipped to the grid.
/// The cell itself is never included.
///
pub fn get_neighbors(height: usize, width: usize, i: usize, j: usize) -> Vec<Cell> {
    let mut neighbors = Vec::with_capacity(8);
    for ni in i.saturating_sub(1)..=(i + 1).min(height.saturating_sub(1)) {
        for nj in j.saturating_sub(1)..=(j + 1).min(width.saturating_sub(1)) {
            if (ni, nj) != (i, j) {
                neighbors.push((ni, nj));
            }
        }
    }
    neighbors
}

/// All cells of the grid in row-major order.
pub fn all_cells(height: usize, width: usize) -> impl Iterator<Item = Cell> {
    (0..height).flat_map(move |i| (0..width).map(move |j| (i, j)))
}

pub fn get_row_col_str(height: usize, width: usize) -> String {
    format!("nrows: {}, ncols: {}\n", height, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_interior() {
        let neighbors = get_neighbors(3, 3, 1, 1);
        assert_eq!(8, neighbors.len());
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn test_neighbors_corners_are_clipped() {
        assert_eq!(vec![(0, 1), (1, 0), (1, 1)], get_neighbors(3, 3, 0, 0));
        assert_eq!(vec![(1, 1), (1, 2), (2, 1)], get_neighbors(3, 3, 2, 2));
    }

    #[test]
    fn test_neighbors_single_row() {
        assert_eq!(vec![(0, 0), (0, 2)], get_neighbors(1, 4, 0, 1));
        assert!(get_neighbors(1, 1, 0, 0).is_empty());
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(2, 3, (1, 2)).is_ok());
        assert_eq!(
            Err(Error::OutOfBounds { cell: (2, 0), height: 2, width: 3 }),
            check_bounds(2, 3, (2, 0))
        );
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Ok(12), cell_count(3, 4));
        assert_eq!(
            Err(Error::GridTooLarge { height: usize::MAX, width: 2 }),
            cell_count(usize::MAX, 2)
        );
    }

    #[test]
    fn test_all_cells_row_major() {
        let cells: Vec<Cell> = all_cells(2, 2).collect();
        assert_eq!(vec![(0, 0), (0, 1), (1, 0), (1, 1)], cells);
    }
}
