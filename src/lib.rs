/*
lib.rs

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

//! Sliding-tile ("15-puzzle") game engine.
//!
//! The engine is the [`game::Game`] session around a [`board::Board`] of
//! [`tile::Tile`] cells. A new game populates the board in ascending
//! order and hands it to [`shuffle`], which randomizes it into a
//! configuration that is guaranteed solvable. Player moves go through
//! [`game::Game::attempt_move`], which enforces the adjacent-to-the-blank
//! rule, reports the changed cells, and detects the win.
//!
//! The engine is synchronous, single-threaded, and free of any rendering
//! concern: front ends supply grid dimensions and per-tile payload
//! handles, pull board snapshots with [`board::Board::cells`], and receive
//! the win notification through [`game::MoveOutcome`]. The crate's own
//! front end is the terminal interface in [`cli_options`].

pub mod board;
pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod highscores;
pub mod saver;
pub mod shuffle;
pub mod tile;
