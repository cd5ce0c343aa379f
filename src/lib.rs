pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod knowledge;
pub mod mine_map;
pub mod moves;
pub mod sentence;

pub use error::{Error, Result};

///////////////////
// - - - - - - - //
// - - 1 2 1 - - //
// - 1 . . . 1 - //
// 1 . . . . . 1 //
///////////////////
