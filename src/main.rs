use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::{Piece, Status},
    config::Config,
    solver::{Difficulty, Solver},
    DEFAULT_DEPTH, HEIGHT, WIDTH,
};

mod game;
use game::*;

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser)]
#[command(name = "connect4_minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows on the board
    #[arg(long, default_value_t = HEIGHT)]
    rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = WIDTH)]
    columns: usize,

    /// Search depth of the expert opponent in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Playing strength: beginner, intermediate or expert
    #[arg(long, default_value = "expert")]
    difficulty: Difficulty,

    /// Who moves first
    #[arg(long, value_enum, default_value_t = First::Random)]
    first: First,

    /// Search root moves on all cores
    #[arg(long)]
    parallel: bool,

    /// Log search diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum First {
    Human,
    Ai,
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(cli.rows, cli.columns, cli.depth)?;
    let mut solver = Solver::new(config)
        .with_difficulty(cli.difficulty)
        .with_parallel(cli.parallel);

    let first = match cli.first {
        First::Human => Piece::Player,
        First::Ai => Piece::Ai,
        First::Random if fastrand::bool() => Piece::Player,
        First::Random => Piece::Ai,
    };
    let mut game = Game::new(&config, first);
    info!(
        rows = config.rows(),
        columns = config.columns(),
        depth = config.depth(),
        difficulty = ?solver.difficulty(),
        "new game"
    );

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        game.display()?;

        match game.state {
            Status::Playing => {
                let next_move = if game.turn == Piece::Ai {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                    spinner.set_message("AI is thinking...");
                    spinner.enable_steady_tick(100);

                    let column = solver.next_move(game.grid());
                    spinner.finish_and_clear();

                    let column = column?.ok_or_else(|| anyhow!("no legal move left for the AI"))?;
                    println!("AI plays column {}", column + 1);
                    column + 1

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        // end of input
                        break;
                    }

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Status::PlayerWin => {
                println!("Red wins!");
                break;
            }
            Status::AiWin => {
                println!("Yellow wins!");
                break;
            }
            Status::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    info!(moves = %game.moves, "game over");
    Ok(())
}
