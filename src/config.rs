//! Fixed game parameters shared by the board and the search

use crate::{Error, Result, DEFAULT_DEPTH, HEIGHT, WIDTH};

/// Board dimensions and search depth, fixed for the lifetime of a game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    rows: usize,
    columns: usize,
    depth: usize,
}

impl Config {
    /// Creates a configuration, rejecting empty boards and a zero search depth
    pub fn new(rows: usize, columns: usize, depth: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidConfig(format!(
                "board must have at least one row and column, got {}x{}",
                rows, columns
            )));
        }
        if depth == 0 {
            return Err(Error::InvalidConfig(
                "search depth must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            rows,
            columns,
            depth,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Search depth in plies used by the move chooser
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: HEIGHT,
            columns: WIDTH,
            depth: DEFAULT_DEPTH,
        }
    }
}
