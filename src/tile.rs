/*
tile.rs

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

//! Sliding tile representation.
//!
//! A [`Tile`] carries its identity (the cell it occupies when the puzzle is
//! solved) wherever it moves on the board. The board swaps whole [`Tile`]
//! values between cells, so the identity is set once at creation and never
//! reassigned.

/// A single tile of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Index of the cell that the tile occupies in the solved puzzle,
    /// counted row by row from the top-left cell.
    order_index: usize,

    /// Whether this is the blank tile. Exactly one tile of a populated
    /// board is blank.
    blank: bool,

    /// Opaque handle to the visual content of the tile (image slice,
    /// label). The handle belongs to the front end and is never
    /// interpreted by the engine.
    payload: usize,
}

impl Tile {
    /// Create a [`Tile`] object.
    pub fn new(order_index: usize, payload: usize, blank: bool) -> Self {
        Self {
            order_index,
            blank,
            payload,
        }
    }

    /// Return the solved-position identity of the tile.
    pub fn order_index(&self) -> usize {
        self.order_index
    }

    /// Whether this is the blank tile.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Return the front-end payload handle.
    pub fn payload(&self) -> usize {
        self.payload
    }
}
