use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::Result;
use crate::grid::Cell;
use crate::knowledge::KnowledgeBase;
use crate::mine_map::MineMap;

/// What happened on a single move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The cell was safe and showed count. proven is false if the move was a guess.
    Revealed { cell: Cell, count: usize, proven: bool },
    HitMine(Cell),
    /// No cell left to try.
    Stuck,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost(Cell),
    Stuck,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub proven_moves: usize,
    pub guesses: usize,
}

/// Plays the knowledge base against a mine map.
pub struct Game {
    board: MineMap,
    ai: KnowledgeBase,
    stats: Stats,
}

impl Game {
    /// Mine placement uses the configured seed, random moves the seed after it.
    pub fn new(config: &GameConfig) -> Result<Game> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, height = config.height, width = config.width, nmines = config.nmines, "new game");
        let mut rng = StdRng::seed_from_u64(seed);
        let board = MineMap::generate(config.height, config.width, config.nmines, &mut rng)?;
        Ok(Game::with_board(board, seed.wrapping_add(1)))
    }

    pub fn with_board(board: MineMap, seed: u64) -> Game {
        let ai = KnowledgeBase::new(board.get_num_rows(), board.get_num_cols(), seed);
        Game { board, ai, stats: Stats::default() }
    }

    pub fn board(&self) -> &MineMap {
        &self.board
    }

    pub fn ai(&self) -> &KnowledgeBase {
        &self.ai
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    ///
    /// Reveals the given cell. If it's safe, the knowledge base learns its count and every mine
    /// it knows about gets flagged on the board.
    ///
    pub fn reveal(&mut self, cell: Cell) -> Result<Step> {
        let is_mine = self.board.is_mine(cell)?;
        let proven = self.ai.safes().contains(&cell);
        if proven {
            self.stats.proven_moves += 1;
        } else {
            self.stats.guesses += 1;
        }
        if is_mine {
            info!(?cell, "hit a mine");
            return Ok(Step::HitMine(cell));
        }
        let count = self.board.nearby_mines(cell)?;
        debug!(?cell, count, proven, "revealed");
        self.ai.add_knowledge(cell, count)?;
        for mine in self.ai.mines() {
            self.board.flag(*mine)?;
        }
        Ok(Step::Revealed { cell, count, proven })
    }

    /// Make the next move: a cell known to be safe if there is one, otherwise a random guess.
    pub fn step(&mut self) -> Result<Step> {
        let next = self.ai.make_safe_move().or_else(|| self.ai.make_random_move());
        match next {
            Some(cell) => self.reveal(cell),
            None => Ok(Step::Stuck),
        }
    }

    /// Keep moving until the game is won, lost, or there's nothing left to do.
    pub fn play(&mut self) -> Result<Outcome> {
        let outcome = loop {
            if self.board.won() {
                break Outcome::Won;
            }
            match self.step()? {
                Step::Revealed { .. } => continue,
                Step::HitMine(cell) => break Outcome::Lost(cell),
                Step::Stuck => break Outcome::Stuck,
            }
        };
        info!(
            ?outcome,
            proven_moves = self.stats.proven_moves,
            guesses = self.stats.guesses,
            "game over"
        );
        Ok(outcome)
    }
}
