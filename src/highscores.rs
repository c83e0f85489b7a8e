/*
highscores.rs

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

//! Manage high scores for the puzzle grids.
//!
//! The main object, [`HighScores`], maintains a list of the best games,
//! those won in the fewest moves, for each grid size.
//! This object is saved when the player wins a game that makes it to the
//! scoreboard, and is restored when Taquin starts.
//! See the [`crate::saver::highscores`] module that saves and restores the
//! [`HighScores`] object.

use std::collections::HashMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represents a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// Number of moves it took to solve the puzzle.
    pub moves: usize,

    /// Completion timestamp, which is used to display the date and time in
    /// the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a grid size.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct GridHighScoreBoard {
    /// Sorted list of the top scores, fewest moves first.
    /// The number of scores in this list is controlled by the
    /// [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl GridHighScoreBoard {
    /// Create a [`GridHighScoreBoard`] object.
    fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board,
    /// or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, moves: usize) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<Score> = Vec::with_capacity(BOARD_SIZE);
        let mut i: usize = 0;

        for score in &self.top {
            // Insert the new score to the temporary board
            if moves < score.moves && new_score_position.is_none() {
                new_score_position = Some(i + 1);
                tmp_top.push(Score {
                    moves,
                    when: SystemTime::now(),
                });
                i += 1;
            }
            // Do not add more scores than the board size
            if i >= BOARD_SIZE {
                break;
            }
            tmp_top.push(*score);
            i += 1;
        }
        // If the board is not full and the new score has not been added
        // yet, then add the new score at the end of the board
        if i < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(i + 1);
            tmp_top.push(Score {
                moves,
                when: SystemTime::now(),
            });
        }
        self.top = tmp_top;
        new_score_position
    }
}

/// List of the scoreboards for the grid sizes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`GridHighScoreBoard`] scoreboards indexed by the grid
    /// size.
    ///
    /// The grid index is a string in the format "<rows>x<columns>".
    board: HashMap<String, GridHighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of
    /// scoreboards.
    fn build_key(rows: usize, cols: usize) -> String {
        format!("{rows}x{cols}")
    }

    /// Add a score to the scoreboard of the given grid size and return the
    /// position in the scoreboard, or None if the score does not make it
    /// to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(&mut self, rows: usize, cols: usize, moves: usize) -> Option<usize> {
        let key: String = Self::build_key(rows, cols);
        let scoreboard: &mut GridHighScoreBoard =
            self.board.entry(key).or_insert(GridHighScoreBoard::new());

        scoreboard.add_score(moves)
    }

    /// Return the list of [`Score`] for the given grid size.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, rows: usize, cols: usize) -> Option<&Vec<Score>> {
        let key: String = Self::build_key(rows, cols);

        match self.board.get(&key) {
            Some(b) => Some(&b.top),
            None => None,
        }
    }

    /// Return whether the list of scoreboards is empty (no scoreboard for
    /// any grid size)
    pub fn is_empty(&self) -> bool {
        self.board.len() == 0
    }
}
