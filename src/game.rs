use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    board::{Grid, Piece, Status},
    config::Config,
    lines::has_win,
    Error,
};

/// The live game: the only board that is ever mutated in place
pub struct Game {
    grid: Grid,
    pub turn: Piece,
    pub moves: String,
    pub state: Status,
}

impl Game {
    pub fn new(config: &Config, first: Piece) -> Self {
        Self {
            grid: Grid::new(config),
            turn: first,
            moves: String::new(),
            state: Status::Playing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Plays the side to move into a 1-indexed column, then checks for a win or draw
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<Status> {
        if column_one_indexed == 0 {
            return Err(Error::ColumnOutOfRange {
                column: 0,
                columns: self.grid.columns(),
            }
            .into());
        }
        self.grid.play_checked(column_one_indexed - 1, self.turn)?;

        self.state = if has_win(&self.grid, self.turn) {
            match self.turn {
                Piece::Ai => Status::AiWin,
                _ => Status::PlayerWin,
            }
        } else if self.grid.is_full() {
            Status::Draw
        } else {
            Status::Playing
        };
        self.moves.push_str(&column_one_indexed.to_string());
        self.turn = self.turn.opponent();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();
        let (rows, columns) = (self.grid.rows(), self.grid.columns());

        let labels: String = (1..=columns).map(|x| (x % 10).to_string()).collect();
        stdout.queue(PrintStyledContent(style(labels + "\n")))?;
        for _ in 0..rows {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..rows {
            for column in 0..columns {
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - 1 - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.grid.get(row, column) {
                                Piece::Player => Color::Red,
                                Piece::Ai => Color::Yellow,
                                Piece::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
