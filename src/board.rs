use std::fmt;

use crate::{config::Config, lines, Error, Result};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The other active piece, or `Empty` for an empty cell
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// The outcome of a position from the game loop's point of view
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

/// A gravity-filled game board
///
/// Cells are stored left-to-right, bottom-to-top, so row 0 is the bottom row.
/// Pieces only enter a column at its lowest empty cell when played through
/// [`Grid::play_checked`]; [`Grid::place`] trusts its caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Piece>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Creates an empty board with the configured dimensions
    pub fn new(config: &Config) -> Self {
        Self {
            cells: vec![Piece::Empty; config.rows() * config.columns()],
            rows: config.rows(),
            columns: config.columns(),
        }
    }

    /// Builds a position from a string of 1-indexed column digits,
    /// alternating pieces starting with the human player
    pub fn from_moves<S: AsRef<str>>(config: &Config, moves: S) -> Result<Self> {
        let mut grid = Self::new(config);
        let mut piece = Piece::Player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) if column > 0 => {
                    grid.play_checked(column as usize - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(Error::InvalidMove(column_char)),
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The column awarded the center bias by the evaluator
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    /// Reads a single cell
    ///
    /// # Panics
    /// Panics if `row` or `column` is outside the board.
    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[self.index(row, column)]
    }

    /// Sets a cell without any legality check
    ///
    /// # Panics
    /// Panics if `row` or `column` is outside the board.
    pub fn place(&mut self, row: usize, column: usize, piece: Piece) {
        let idx = self.index(row, column);
        self.cells[idx] = piece;
    }

    /// Returns true if the top cell of `column` is empty
    ///
    /// # Panics
    /// Panics if `column` is outside the board.
    pub fn is_legal(&self, column: usize) -> bool {
        self.get(self.rows - 1, column).is_empty()
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    ///
    /// # Panics
    /// Panics if `column` is outside the board.
    pub fn open_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.get(row, column).is_empty())
    }

    /// Every playable column in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.is_legal(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| !self.is_legal(column))
    }

    /// Drops `piece` into `column`, returning the row it landed on
    pub fn play_checked(&mut self, column: usize, piece: Piece) -> Result<usize> {
        if column >= self.columns {
            return Err(Error::ColumnOutOfRange {
                column: column + 1,
                columns: self.columns,
            });
        }
        let row = self
            .open_row(column)
            .ok_or(Error::ColumnFull { column: column + 1 })?;
        self.place(row, column, piece);
        Ok(row)
    }

    /// Classifies the position for the game loop
    pub fn status(&self) -> Status {
        if lines::has_win(self, Piece::Player) {
            Status::PlayerWin
        } else if lines::has_win(self, Piece::Ai) {
            Status::AiWin
        } else if self.is_full() {
            Status::Draw
        } else {
            Status::Playing
        }
    }

    /// Iterates over the pieces of one column from the bottom up
    pub fn column(&self, column: usize) -> impl Iterator<Item = Piece> + '_ {
        (0..self.rows).map(move |row| self.get(row, column))
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            column < self.columns,
            "column {} out of range, board has {} columns",
            column,
            self.columns
        );
        assert!(
            row < self.rows,
            "row {} out of range, board has {} rows",
            row,
            self.rows
        );
        column + self.columns * row
    }
}

impl fmt::Display for Grid {
    // top row first, as the board is seen by the players
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let symbol = match self.get(row, column) {
                    Piece::Empty => '.',
                    Piece::Player => 'X',
                    Piece::Ai => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
