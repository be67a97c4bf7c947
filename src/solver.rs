//! An agent to choose the computer's move in Connect 4

use std::{str::FromStr, time::Instant};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    board::{Grid, Piece},
    config::Config,
    evaluation,
    lines::{has_win, is_terminal},
    Error, Result,
};

/// The score of a position the computer has won
pub const WIN_SCORE: i64 = 10_000_000_000;
/// The score of a position the human has won
pub const LOSS_SCORE: i64 = -WIN_SCORE;

/// Open search bounds, strictly outside every reachable score
pub const NEG_INFINITY: i64 = i64::MIN;
pub const POS_INFINITY: i64 = i64::MAX;

/// How strongly the computer plays
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// A random legal column
    Beginner,
    /// The best column by static evaluation one move ahead
    Intermediate,
    /// Full minimax search
    #[default]
    Expert,
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(Error::InvalidConfig(format!("unknown difficulty '{}'", s))),
        }
    }
}

/// A move-choosing agent for the computer player
///
/// # Notes
/// The search is a depth-limited minimax with alpha-beta pruning. Leaves are
/// always scored from the computer's point of view, whichever side placed the
/// last piece: a won position scores [`WIN_SCORE`], a lost one [`LOSS_SCORE`],
/// a drawn one 0, and anything else the static evaluation for [`Piece::Ai`].
///
/// Columns are tried in ascending order and only a strictly better score
/// replaces the current choice, so ties go to the lowest column.
#[derive(Clone, Debug)]
pub struct Solver {
    config: Config,
    difficulty: Difficulty,
    parallel: bool,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new expert `Solver` searching to the configured depth
    pub fn new(config: Config) -> Self {
        Self {
            config,
            difficulty: Difficulty::default(),
            parallel: false,
            node_count: 0,
        }
    }

    /// Sets the playing strength used by [`Solver::next_move`]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Searches the root's columns on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move, or `None` at a leaf, and
    /// the score of the position relative to the computer.
    pub fn minimax(
        &mut self,
        grid: &Grid,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.node_count += 1;

        if depth == 0 || is_terminal(grid) {
            return (None, Self::leaf_score(grid));
        }

        let columns = grid.legal_columns();
        let (piece, mut value) = if maximizing {
            (Piece::Ai, NEG_INFINITY)
        } else {
            (Piece::Player, POS_INFINITY)
        };
        // the first candidate stands until a strictly better one is found
        let mut best_column = columns[0];

        for column in columns {
            let score = match Self::snapshot(grid, column, piece) {
                Some(next) => self.minimax(&next, depth - 1, alpha, beta, !maximizing).1,
                None => continue,
            };

            if maximizing {
                if score > value {
                    value = score;
                    best_column = column;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = column;
                }
                beta = beta.min(value);
            }
            // the opponent will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        (Some(best_column), value)
    }

    /// Chooses the computer's move with a full-window search at the configured depth
    ///
    /// Returns `None` only when the board is full.
    pub fn choose_move(&mut self, grid: &Grid) -> Result<Option<usize>> {
        let start = Instant::now();
        let nodes_before = self.node_count;

        let (column, score) = if self.parallel {
            self.parallel_search(grid)
        } else {
            self.minimax(grid, self.config.depth(), NEG_INFINITY, POS_INFINITY, true)
        };

        debug!(
            column = ?column,
            score,
            nodes = self.node_count - nodes_before,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "search complete"
        );
        Self::checked(grid, column)
    }

    /// Chooses the computer's move at the configured difficulty
    pub fn next_move(&mut self, grid: &Grid) -> Result<Option<usize>> {
        match self.difficulty {
            Difficulty::Beginner => Ok(Self::random_move(grid)),
            Difficulty::Intermediate => Self::checked(grid, Self::greedy_move(grid, Piece::Ai)),
            Difficulty::Expert => self.choose_move(grid),
        }
    }

    /// A uniformly random legal column
    pub fn random_move(grid: &Grid) -> Option<usize> {
        let columns = grid.legal_columns();
        if columns.is_empty() {
            return None;
        }
        Some(columns[fastrand::usize(..columns.len())])
    }

    /// The column whose resulting position evaluates best for `piece`, looking one move ahead
    pub fn greedy_move(grid: &Grid, piece: Piece) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for column in grid.legal_columns() {
            if let Some(next) = Self::snapshot(grid, column, piece) {
                let score = evaluation::score(&next, piece);
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((column, score));
                }
            }
        }
        best.map(|(column, _)| column)
    }

    /// Searches every root column independently with a full window
    ///
    /// The first column with the highest score is chosen, matching the
    /// sequential search exactly.
    fn parallel_search(&mut self, grid: &Grid) -> (Option<usize>, i64) {
        let depth = self.config.depth();
        if is_terminal(grid) {
            return self.minimax(grid, depth, NEG_INFINITY, POS_INFINITY, true);
        }

        let base = self.clone();
        let results: Vec<(usize, i64, usize)> = grid
            .legal_columns()
            .into_par_iter()
            .filter_map(|column| {
                let next = Self::snapshot(grid, column, Piece::Ai)?;
                let mut child = base.clone();
                child.node_count = 0;
                let (_, score) =
                    child.minimax(&next, depth - 1, NEG_INFINITY, POS_INFINITY, false);
                Some((column, score, child.node_count))
            })
            .collect();

        self.node_count += 1;
        let mut best: (Option<usize>, i64) = (None, NEG_INFINITY);
        for (column, score, nodes) in results {
            trace!(column, score, "root branch");
            self.node_count += nodes;
            if best.0.is_none() || score > best.1 {
                best = (Some(column), score);
            }
        }
        best
    }

    fn leaf_score(grid: &Grid) -> i64 {
        if has_win(grid, Piece::Ai) {
            WIN_SCORE
        } else if has_win(grid, Piece::Player) {
            LOSS_SCORE
        } else if grid.legal_columns().is_empty() {
            0
        } else {
            evaluation::score(grid, Piece::Ai)
        }
    }

    // a copy of the board with `piece` dropped into `column`
    fn snapshot(grid: &Grid, column: usize, piece: Piece) -> Option<Grid> {
        let row = grid.open_row(column)?;
        let mut next = grid.clone();
        next.place(row, column, piece);
        Some(next)
    }

    fn checked(grid: &Grid, column: Option<usize>) -> Result<Option<usize>> {
        match column {
            None if !grid.legal_columns().is_empty() => Err(Error::SearchInvariant),
            _ => Ok(column),
        }
    }
}
