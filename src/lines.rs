//! Enumeration of four-cell lines and win detection

use crate::board::{Grid, Piece};

/// The number of aligned pieces needed to win
pub const WINDOW: usize = 4;

/// The directions a line of four can run in
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// bottom-left to top-right
    Rising,
    /// top-left to bottom-right
    Falling,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Rising,
        Orientation::Falling,
    ];

    // (row step, column step)
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Rising => (1, 1),
            Orientation::Falling => (-1, 1),
        }
    }

    /// The cells of the window starting at (`row`, `column`), if it fits on the board
    pub fn window_at(
        self,
        rows: usize,
        columns: usize,
        row: usize,
        column: usize,
    ) -> Option<[(usize, usize); WINDOW]> {
        let (dy, dx) = self.step();
        let mut cells = [(0, 0); WINDOW];
        for (i, cell) in cells.iter_mut().enumerate() {
            let y = row as isize + dy * i as isize;
            let x = column as isize + dx * i as isize;
            if y < 0 || x < 0 || y >= rows as isize || x >= columns as isize {
                return None;
            }
            *cell = (y as usize, x as usize);
        }
        Some(cells)
    }
}

/// Every window of a `rows` x `columns` board as (row, column) coordinates
pub fn window_cells(
    rows: usize,
    columns: usize,
) -> impl Iterator<Item = [(usize, usize); WINDOW]> {
    Orientation::ALL.into_iter().flat_map(move |orientation| {
        (0..rows)
            .flat_map(move |row| (0..columns).map(move |column| (row, column)))
            .filter_map(move |(row, column)| orientation.window_at(rows, columns, row, column))
    })
}

/// Every window of the board as the pieces it contains
pub fn windows(grid: &Grid) -> impl Iterator<Item = [Piece; WINDOW]> + '_ {
    window_cells(grid.rows(), grid.columns())
        .map(move |cells| cells.map(|(row, column)| grid.get(row, column)))
}

/// Returns true if `piece` fills at least one window
pub fn has_win(grid: &Grid, piece: Piece) -> bool {
    debug_assert!(!piece.is_empty(), "only active pieces can win");
    windows(grid).any(|window| window.iter().all(|&cell| cell == piece))
}

/// Returns true if either side has won or the board is full
pub fn is_terminal(grid: &Grid) -> bool {
    has_win(grid, Piece::Player) || has_win(grid, Piece::Ai) || grid.legal_columns().is_empty()
}
