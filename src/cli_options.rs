/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Taquin.

Taquin is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Taquin is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Taquin. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Without options, Taquin starts an interactive game in the terminal.
//! The `--count` option switches to a generator mode intended for
//! developers: it produces shuffled boards, prints them, and verifies that
//! every one of them satisfies the solvability invariant.
//!
//! # Examples
//!
//! Play a 3x3 puzzle:
//!
//! ```text
//! $ taquin --size 3
//! +---+---+---+
//! | 4 | 1 | 2 |
//! +---+---+---+
//! | 7 | 5 | 3 |
//! +---+---+---+
//! | 8 | 6 |   |
//! +---+---+---+
//! Move (row column, starting at 1), n for a new game, q to quit:
//! ```
//!
//! Generate three shuffled 4x4 boards from a fixed seed and print
//! generation statistics:
//!
//! ```text
//! $ taquin --count 3 --seed 42 --summary
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io::{BufRead, Write, stdin, stdout};
use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::board::Board;
use crate::config::{COPYRIGHT_NOTICE, VERSION};
use crate::draw;
use crate::game::{Game, GameState, MoveOutcome};
use crate::highscores::HighScores;
use crate::saver::highscores::SaverHighScores;
use crate::shuffle;
use crate::tile::Tile;

/// Play the sliding-tile puzzle in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version = VERSION, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Size of the square grid, between 2 and 5
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=5))]
    size: u8,

    /// Seed for the random generator, for reproducible boards
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Generate the given number of shuffled boards instead of playing
    #[arg(short, long, group = "generate")]
    count: Option<usize>,

    /// Print some statistics after generating the boards
    #[arg(short = 'm', long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Show the high scores and exit
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
///
/// The returned value is the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.scores {
        return print_scores();
    }

    match args.count {
        Some(count) => generate(usize::from(args.size), args.seed, count, args.summary),
        None => play(usize::from(args.size), args.seed),
    }
}

/// Build the random generator, seeded from the command line or from the
/// operating system.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Return the directory where Taquin saves the high scores.
fn data_dir() -> PathBuf {
    let mut dir: PathBuf = match env::var_os("XDG_DATA_HOME") {
        Some(d) => PathBuf::from(d),
        None => {
            let mut home: PathBuf = PathBuf::from(env::var_os("HOME").unwrap_or_default());
            home.push(".local");
            home.push("share");
            home
        }
    };
    dir.push("taquin");
    dir
}

/// Build a board populated in ascending order with the blank at the
/// bottom-right cell.
fn canonical_board(size: usize) -> Board {
    let mut board: Board = Board::new(size, size).expect("grid size validated by clap");
    for r in 0..size {
        for c in 0..size {
            let order_index: usize = r * size + c;
            let blank: bool = r == size - 1 && c == size - 1;
            board
                .set_tile(Tile::new(order_index, order_index, blank), r, c)
                .expect("cell coordinates derived from the board dimensions");
        }
    }
    board
}

//
// Generator mode
//

/// Generate `count` shuffled boards, print them, and verify that each of
/// them is solvable.
fn generate(size: usize, seed: Option<u64>, count: usize, summary: bool) -> u8 {
    let mut rng: StdRng = make_rng(seed);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut parity_fixes: usize = 0;

    for i in 0..count {
        debug!("Generating board {i}");
        let mut board: Board = canonical_board(size);
        let start: Instant = Instant::now();

        shuffle::randomize(&mut board, &mut rng).expect("populated board");
        shuffle::reset_blank_position(&mut board).expect("populated board");
        if !shuffle::is_solvable(&board).expect("populated board") {
            parity_fixes += 1;
            shuffle::force_solvable(&mut board).expect("populated board");
        }

        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        // Verify the solvability invariant
        if board.blank_position() != Some((size - 1, size - 1)) {
            eprintln!("Blank not in its home cell: {:?}", board.blank_position());
            panic!("Bug: blank tile not normalized to the bottom-right cell");
        }
        if !shuffle::is_solvable(&board).expect("populated board") {
            eprintln!(
                "Odd inversion count: {}",
                shuffle::sum_inversions(&board).expect("populated board")
            );
            panic!("Bug: unsolvable configuration after the shuffle");
        }

        println!("{}", draw::board_to_string(&board));
    }

    // Print some stats
    if summary {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s
parity fixes = {}",
            total,
            total / count as f32,
            max,
            parity_fixes
        );
    }
    0
}

//
// High scores listing
//

/// Print the saved scoreboards.
fn print_scores() -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(data_dir());
    let highscores: HighScores = match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => {
            println!("No high scores yet.");
            return 0;
        }
        Err(error) => {
            eprintln!("Cannot read the high scores: {error}");
            return 1;
        }
    };

    if highscores.is_empty() {
        println!("No high scores yet.");
        return 0;
    }
    for size in 2..=5 {
        if let Some(scores) = highscores.get_score(size, size) {
            println!("{size}x{size}");
            for (i, score) in scores.iter().enumerate() {
                let dt: DateTime<Local> = DateTime::from(score.when);
                println!("{:>4}. {:>5} moves  {}", i + 1, score.moves, dt.format("%c"));
            }
        }
    }
    0
}

//
// Interactive play mode
//

/// Record a win on the scoreboard and print the position, if the score
/// makes the board.
fn record_win(game: &Game, size: usize) -> Result<(), Box<dyn Error>> {
    let saver: SaverHighScores = SaverHighScores::new(data_dir());
    let mut highscores: HighScores = saver.get_highscores()?.unwrap_or_default();

    if let Some(position) = highscores.add_score(size, size, game.moves()) {
        saver.save_highscores(&highscores)?;
        println!("New high score: position {position} on the {size}x{size} scoreboard!");
    }
    Ok(())
}

/// Print the board and the session counters.
fn print_board(game: &Game) {
    if let Some(board) = game.board() {
        println!("{}", draw::board_to_string(board));
    }
    println!("Games won: {}   Moves: {}", game.score(), game.moves());
}

/// Run an interactive game in the terminal.
fn play(size: usize, seed: Option<u64>) -> u8 {
    let mut rng: StdRng = make_rng(seed);
    let mut game: Game = Game::new();
    if let Err(error) = game.start_new_game(size, size, &mut rng) {
        eprintln!("Cannot start the game: {error}");
        return 1;
    }

    println!("Restore the tiles to ascending order.");
    print_board(&game);

    loop {
        print!("Move (row column, starting at 1), n for a new game, q to quit: ");
        let _ = stdout().flush();

        let mut line: String = String::new();
        match stdin().lock().read_line(&mut line) {
            Ok(0) => return 0,
            Ok(_) => (),
            Err(error) => {
                eprintln!("Cannot read the input: {error}");
                return 1;
            }
        }

        match line.trim() {
            "" => continue,
            "q" => return 0,
            "n" => {
                if let Err(error) = game.start_new_game(size, size, &mut rng) {
                    eprintln!("Cannot start the game: {error}");
                    return 1;
                }
                print_board(&game);
                continue;
            }
            input => {
                // Convert the 1-based player coordinates to cells
                let coords: Vec<usize> = input
                    .split_whitespace()
                    .filter_map(|w| w.parse::<usize>().ok())
                    .filter_map(|v| v.checked_sub(1))
                    .collect();
                let &[row, col] = &coords[..] else {
                    println!("Expecting two numbers between 1 and {size}.");
                    continue;
                };

                match game.attempt_move(row, col) {
                    Ok(MoveOutcome::Won { .. }) => {
                        print_board(&game);
                        println!("You won in {} moves!", game.moves());
                        if let Err(error) = record_win(&game, size) {
                            eprintln!("Cannot save the high scores: {error}");
                        }
                    }
                    Ok(MoveOutcome::Moved { .. }) => print_board(&game),
                    Ok(MoveOutcome::Ignored) => {
                        if game.state() == GameState::Won {
                            println!("The puzzle is solved. Enter n to start a new game.");
                        } else {
                            println!("This tile is not next to the empty cell.");
                        }
                    }
                    Err(error) => println!("Invalid move: {error}"),
                }
            }
        }
    }
}
