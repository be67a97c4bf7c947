//! Static scoring of non-terminal positions

use crate::{
    board::{Grid, Piece},
    lines::{self, WINDOW},
};

/// Score per own piece in the center column
pub const CENTER_WEIGHT: i64 = 3;
/// A window holding four own pieces
pub const FOUR_SCORE: i64 = 100;
/// A window holding three own pieces and one empty cell
pub const THREE_SCORE: i64 = 5;
/// A window holding two own pieces and two empty cells
pub const TWO_SCORE: i64 = 2;
/// A window holding three opponent pieces and one empty cell
pub const OPPONENT_THREE_SCORE: i64 = -4;

/// Scores a single window from `piece`'s point of view
pub fn score_window(window: &[Piece; WINDOW], piece: Piece) -> i64 {
    let count = |target: Piece| window.iter().filter(|&&cell| cell == target).count();
    let own = count(piece);
    let empty = count(Piece::Empty);

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    };

    if count(piece.opponent()) == 3 && empty == 1 {
        score += OPPONENT_THREE_SCORE;
    }
    score
}

/// Scores a whole position from `piece`'s point of view; higher is better for `piece`
///
/// Scores are only comparable between positions of the same board size.
pub fn score(grid: &Grid, piece: Piece) -> i64 {
    let center = grid
        .column(grid.center_column())
        .filter(|&cell| cell == piece)
        .count() as i64;

    center * CENTER_WEIGHT
        + lines::windows(grid)
            .map(|window| score_window(&window, piece))
            .sum::<i64>()
}
