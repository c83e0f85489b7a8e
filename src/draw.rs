/*
draw.rs

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

//! Render a board as text for the terminal front end.
//!
//! Tiles are labeled from 1, in the numbering of the physical puzzle, so
//! the solved board reads in ascending order with the blank cell at the
//! bottom right. The engine itself never depends on this module; it is one
//! possible front-end view of the [`Board`] snapshots.

use crate::board::Board;

/// Render the board as a bordered text grid.
///
/// The blank cell is left empty and an unpopulated cell shows a question
/// mark.
pub fn board_to_string(board: &Board) -> String {
    let cols: usize = board.columns_count();
    let width: usize = (board.rows_count() * cols).to_string().len();

    let mut border: String = String::from("+");
    for _ in 0..cols {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }

    let mut out: String = String::new();
    out.push_str(&border);
    out.push('\n');

    for row in 0..board.rows_count() {
        out.push('|');
        for col in 0..cols {
            let label: String = match board.get_tile(row, col) {
                Ok(t) if t.is_blank() => " ".repeat(width),
                Ok(t) => format!("{:>width$}", t.order_index() + 1),
                Err(_) => format!("{:>width$}", "?"),
            };
            out.push_str(&format!(" {label} |"));
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}
