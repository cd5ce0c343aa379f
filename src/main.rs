use anyhow::Context;
use tracing_subscriber::EnvFilter;

use minesweeper_inference::config::GameConfig;
use minesweeper_inference::game::{Game, Outcome};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GameConfig::from_args(std::env::args().skip(1))
        .context("usage: minesweeper_inference [height] [width] [mines] [seed]")?;
    let mut game = Game::new(&config)?;
    let outcome = game.play()?;

    println!("mines: {}", game.board().to_string());
    println!("knowledge: {}", game.ai().pretty_print());
    match outcome {
        Outcome::Won => println!("All mines flagged - you win!"),
        Outcome::Lost(cell) => println!("Hit a mine at {:?}", cell),
        Outcome::Stuck => println!("No more moves available"),
    }
    let stats = game.stats();
    println!("proven moves: {}, guesses: {}", stats.proven_moves, stats.guesses);
    Ok(())
}
