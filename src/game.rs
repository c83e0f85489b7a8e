/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object orchestrates the board, the win detection, and the
//! session score. Front ends drive it with two calls:
//! [`Game::start_new_game`], which builds and shuffles a fresh board, and
//! [`Game::attempt_move`], which applies one player move and reports the
//! cells that changed so that the front end can redraw them.

use log::debug;
use rand::Rng;

use crate::board::{Board, BoardError};
use crate::shuffle;
use crate::tile::Tile;

/// What the game is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No game has been started yet.
    #[default]
    None,

    /// A game is in progress.
    Playing,

    /// The puzzle is solved; the session waits for a new game.
    Won,
}

/// Result of a move request.
///
/// The `tile` and `blank` coordinates of the [`MoveOutcome::Moved`] and
/// [`MoveOutcome::Won`] variants are the two cells that changed: the cell
/// that now holds the moved tile and the cell that now holds the blank.
/// Front ends only need to redraw those two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The tile slid into the blank cell.
    Moved {
        /// Cell that now holds the moved tile (the blank's previous cell).
        tile: (usize, usize),

        /// Cell that now holds the blank (the move target).
        blank: (usize, usize),
    },

    /// The tile slid into the blank cell and completed the puzzle.
    Won {
        /// Cell that now holds the moved tile.
        tile: (usize, usize),

        /// Cell that now holds the blank.
        blank: (usize, usize),
    },

    /// The move had no effect: either the target cell is not next to the
    /// blank, or no game is in progress. Nothing changed on the board.
    Ignored,
}

/// Manage the status of the game in progress.
#[derive(Debug, Default)]
pub struct Game {
    /// What the game is currently doing.
    state: GameState,

    /// The current board. None before the first game. The board is
    /// replaced wholesale on every new game.
    board: Option<Board>,

    /// Number of games won in this session.
    score: usize,

    /// Number of moves played in the current game.
    moves: usize,
}

impl Game {
    /// Create a [`Game`] object.
    pub fn new() -> Self {
        Self {
            state: GameState::None,
            board: None,
            score: 0,
            moves: 0,
        }
    }

    /// Return the state of the session.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Return the number of games won in this session.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Return the number of moves played in the current game.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Return the current board, or None before the first game.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Start a new game on a fresh, shuffled board.
    ///
    /// The board is populated in ascending order, with each tile's payload
    /// handle equal to its identity and the bottom-right tile as the
    /// blank, and then shuffled into a random solvable configuration.
    /// Starting a new game is valid in every session state and resets the
    /// move counter; the session score is kept.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::InvalidDimensions`] if `rows` or
    /// `cols` is less than two.
    pub fn start_new_game<R: Rng>(
        &mut self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let mut board: Board = Board::new(rows, cols)?;
        for r in 0..rows {
            for c in 0..cols {
                let order_index: usize = r * cols + c;
                let blank: bool = r == rows - 1 && c == cols - 1;
                board.set_tile(Tile::new(order_index, order_index, blank), r, c)?;
            }
        }
        shuffle::shuffle(&mut board, rng)?;

        debug!("New {rows}x{cols} game started");
        self.board = Some(board);
        self.moves = 0;
        self.state = GameState::Playing;
        Ok(())
    }

    /// Request to slide the tile at the given cell into the blank cell.
    ///
    /// The move only takes place while a game is in progress and when the
    /// target cell is edge-adjacent to the blank cell; any other request
    /// is silently ignored and leaves the board untouched. After a
    /// successful move, the win condition is re-checked: on a win the
    /// session enters [`GameState::Won`] and the score is incremented,
    /// atomically with the returned [`MoveOutcome::Won`] notification.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::OutOfBounds`] if the coordinates
    /// are outside the grid, in every session state, and
    /// [`BoardError::EmptyCell`] if no game was ever started.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, BoardError> {
        let board: &mut Board = self.board.as_mut().ok_or(BoardError::EmptyCell)?;

        // Malformed coordinates are a caller bug in every state
        board.get_tile(row, col)?;

        if self.state != GameState::Playing {
            debug!("Move ({row},{col}) ignored: no game in progress");
            return Ok(MoveOutcome::Ignored);
        }

        let (blank_row, blank_col) = board.blank_position().ok_or(BoardError::EmptyCell)?;
        if !board.are_tiles_neighbors(row, col, blank_row, blank_col) {
            debug!("Move ({row},{col}) ignored: not next to the blank ({blank_row},{blank_col})");
            return Ok(MoveOutcome::Ignored);
        }

        // The blank flag travels with the tile: after the swap the blank
        // occupies the target cell and the moved tile the blank's old cell
        board.swap_tiles(row, col, blank_row, blank_col)?;
        self.moves += 1;

        if self.has_won() {
            self.state = GameState::Won;
            self.score += 1;
            debug!("Game won in {} moves, score = {}", self.moves, self.score);
            return Ok(MoveOutcome::Won {
                tile: (blank_row, blank_col),
                blank: (row, col),
            });
        }
        Ok(MoveOutcome::Moved {
            tile: (blank_row, blank_col),
            blank: (row, col),
        })
    }

    /// Whether the puzzle is solved.
    ///
    /// The puzzle is solved when every cell, the blank's home cell
    /// included, holds the tile whose identity matches the cell position
    /// in ascending row-major order. The check is valid with zero moves
    /// played: a board that shuffles into the canonical order reports a
    /// win immediately.
    pub fn has_won(&self) -> bool {
        let Some(board) = self.board.as_ref() else {
            return false;
        };
        let cols: usize = board.columns_count();
        board
            .cells()
            .all(|((r, c), tile)| tile.is_some_and(|t| t.order_index() == r * cols + c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Build a session in progress from the given row-major tile
    /// identities, with the tile of identity `rows * cols - 1` as the
    /// blank.
    fn playing_game(rows: usize, cols: usize, ids: &[usize]) -> Game {
        let mut board: Board = Board::new(rows, cols).unwrap();
        for (i, id) in ids.iter().enumerate() {
            let blank: bool = *id == rows * cols - 1;
            board
                .set_tile(Tile::new(*id, *id, blank), i / cols, i % cols)
                .unwrap();
        }
        Game {
            state: GameState::Playing,
            board: Some(board),
            score: 0,
            moves: 0,
        }
    }

    fn order_indexes(game: &Game) -> Vec<usize> {
        game.board()
            .unwrap()
            .cells()
            .map(|(_, t)| t.unwrap().order_index())
            .collect()
    }

    #[test]
    fn test_new_session() {
        let game: Game = Game::new();
        assert_eq!(game.state(), GameState::None);
        assert_eq!(game.score(), 0);
        assert!(game.board().is_none());
        assert!(!game.has_won());
    }

    #[test]
    fn test_start_new_game() {
        let mut game: Game = Game::new();
        let mut rng: StdRng = StdRng::seed_from_u64(7);

        game.start_new_game(4, 4, &mut rng).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.moves(), 0);

        let board: &Board = game.board().unwrap();
        assert_eq!(board.rows_count(), 4);
        assert_eq!(board.blank_position(), Some((3, 3)));
        assert!(shuffle::is_solvable(board).unwrap());
    }

    #[test]
    fn test_start_new_game_rejects_small_grids() {
        let mut game: Game = Game::new();
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        assert_eq!(
            game.start_new_game(1, 4, &mut rng).unwrap_err(),
            BoardError::InvalidDimensions
        );
        assert_eq!(game.state(), GameState::None);
    }

    #[test]
    fn test_adjacent_move() {
        // Canonical 3x3 board with the blank at (2,2)
        let mut game: Game = playing_game(3, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(game.board().unwrap().are_tiles_neighbors(2, 1, 2, 2));

        let outcome: MoveOutcome = game.attempt_move(2, 1).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                tile: (2, 2),
                blank: (2, 1),
            }
        );
        assert_eq!(order_indexes(&game), vec![0, 1, 2, 3, 4, 5, 6, 8, 7]);
        assert_eq!(game.board().unwrap().blank_position(), Some((2, 1)));
        assert_eq!(game.moves(), 1);
        assert!(!game.has_won());
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_non_adjacent_move_is_a_no_op() {
        let ids: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let mut game: Game = playing_game(3, 3, &ids);

        // (0,0) is nowhere near the blank at (2,2)
        assert_eq!(game.attempt_move(0, 0).unwrap(), MoveOutcome::Ignored);
        // The blank cell itself is not its own neighbor
        assert_eq!(game.attempt_move(2, 2).unwrap(), MoveOutcome::Ignored);

        assert_eq!(order_indexes(&game), ids.to_vec());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_winning_move() {
        // One move away from the solved order
        let mut game: Game = playing_game(3, 3, &[0, 1, 2, 3, 4, 5, 6, 8, 7]);

        let outcome: MoveOutcome = game.attempt_move(2, 2).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Won {
                tile: (2, 1),
                blank: (2, 2),
            }
        );
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.score(), 1);
        assert!(game.has_won());

        // Once won, further move requests are ignored
        assert_eq!(game.attempt_move(2, 1).unwrap(), MoveOutcome::Ignored);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_won_to_playing_cycle() {
        let mut game: Game = playing_game(2, 2, &[0, 1, 3, 2]);
        assert_eq!(
            game.attempt_move(1, 1).unwrap(),
            MoveOutcome::Won {
                tile: (1, 0),
                blank: (1, 1),
            }
        );

        let mut rng: StdRng = StdRng::seed_from_u64(11);
        game.start_new_game(3, 3, &mut rng).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.moves(), 0);
        // The score carries over across games in the session
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_out_of_bounds_move() {
        let mut game: Game = playing_game(3, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(game.attempt_move(3, 0).unwrap_err(), BoardError::OutOfBounds);
        assert_eq!(game.attempt_move(0, 3).unwrap_err(), BoardError::OutOfBounds);

        // Out of bounds is an error even when the session is not playing
        game.state = GameState::Won;
        assert_eq!(game.attempt_move(9, 9).unwrap_err(), BoardError::OutOfBounds);
    }

    #[test]
    fn test_has_won_exactness() {
        // Canonical board: won with zero moves made
        let game: Game = playing_game(3, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(game.has_won());
        assert_eq!(game.moves(), 0);

        // A single misplaced pair anywhere yields false
        let swapped: Game = playing_game(3, 3, &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!swapped.has_won());

        // The blank's home cell counts too
        let blank_off: Game = playing_game(3, 3, &[0, 1, 2, 3, 4, 5, 6, 8, 7]);
        assert!(!blank_off.has_won());
    }

    #[test]
    fn test_rectangular_win_check() {
        let game: Game = playing_game(2, 3, &[0, 1, 2, 3, 4, 5]);
        assert!(game.has_won());

        let not_won: Game = playing_game(2, 3, &[0, 1, 2, 3, 5, 4]);
        assert!(!not_won.has_won());
    }

    #[test]
    fn test_move_before_first_game() {
        let mut game: Game = Game::new();
        assert_eq!(game.attempt_move(0, 0).unwrap_err(), BoardError::EmptyCell);
    }

    #[test]
    fn test_legal_moves_keep_the_invariants() {
        let mut game: Game = Game::new();
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        game.start_new_game(3, 3, &mut rng).unwrap();

        let mut ids: Vec<usize> = order_indexes(&game);
        for (row, col) in [(2, 1), (1, 1), (1, 2), (2, 2), (2, 1), (1, 1)] {
            let outcome: MoveOutcome = game.attempt_move(row, col).unwrap();
            let after: Vec<usize> = order_indexes(&game);
            match outcome {
                MoveOutcome::Ignored => assert_eq!(after, ids),
                _ => assert_ne!(after, ids),
            }
            ids = after;

            // The tile identities remain a permutation of 0..9 and the
            // board keeps a single blank
            let mut sorted: Vec<usize> = ids.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<usize>>());
            assert!(game.board().unwrap().blank_position().is_some());
        }
    }
}
