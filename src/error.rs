use crate::grid::Cell;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cell {cell:?} is outside the {height} x {width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },
    #[error("cell {cell:?} has {max} neighbours, it can't border {count} mines")]
    InvalidCount { cell: Cell, count: usize, max: usize },
    #[error("a {height} x {width} grid is too large")]
    GridTooLarge { height: usize, width: usize },
    #[error("too many mines - a grid of {ncells} cells can have at most {ncells} mines, requested {nmines}")]
    TooManyMines { nmines: usize, ncells: usize },
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid value for {name}: '{value}'")]
    InvalidArgument { name: &'static str, value: String },
}
