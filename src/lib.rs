//! A computer opponent for the board game 'Connect 4'
//!
//! The agent picks its moves with a depth-bounded minimax search using
//! alpha-beta pruning, scoring the leaves with a hand-tuned positional
//! heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Grid, config::Config, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let config = Config::default();
//! let grid = Grid::new(&config);
//! let mut solver = Solver::new(config);
//!
//! assert_eq!(solver.choose_move(&grid)?, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod config;

pub mod error;

pub mod board;

pub mod lines;

pub mod evaluation;

pub mod solver;


pub use error::{Error, Result};

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default search depth in plies
pub const DEFAULT_DEPTH: usize = 5;

// ensure the default board can hold a line of four in every orientation
const_assert!(WIDTH >= lines::WINDOW && HEIGHT >= lines::WINDOW);
const_assert!(DEFAULT_DEPTH > 0);
