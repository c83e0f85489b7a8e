/*
board.rs

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

//! Puzzle board.
//!
//! The [`Board`] object is a rectangular grid of [`Tile`] cells. It is a
//! pure data structure: it provides lookups, swaps, the neighbor test, and
//! the blank locator, but it does not enforce any game rule. In particular,
//! [`Board::swap_tiles`] accepts any pair of cells, because the shuffle
//! algorithm in [`crate::shuffle`] swaps non-adjacent cells during setup.
//! The adjacent-to-the-blank restriction on player moves belongs to the
//! session layer in [`crate::game`].

use std::fmt;

use crate::tile::Tile;

/// Minimum number of rows and columns of a board.
pub const MIN_GRID_SIZE: usize = 2;

/// Type of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The requested grid is smaller than 2x2.
    InvalidDimensions,

    /// The cell coordinates are outside the grid.
    OutOfBounds,

    /// The cell has not been populated with a tile yet.
    EmptyCell,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions => {
                write!(f, "the board requires at least {MIN_GRID_SIZE} rows and columns")
            }
            BoardError::OutOfBounds => write!(f, "cell coordinates outside the grid"),
            BoardError::EmptyCell => write!(f, "the cell does not hold a tile"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Rectangular grid of tiles.
#[derive(Debug, Clone)]
pub struct Board {
    /// Number of rows. Fixed for the lifetime of the board.
    rows: usize,

    /// Number of columns. Fixed for the lifetime of the board.
    cols: usize,

    /// The cells, row by row from the top-left cell. A cell is None until
    /// a tile is placed with [`Board::set_tile`].
    grid: Vec<Option<Tile>>,
}

impl Board {
    /// Create a [`Board`] object with `rows * cols` unpopulated cells.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::InvalidDimensions`] if `rows` or
    /// `cols` is less than two.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_GRID_SIZE || cols < MIN_GRID_SIZE {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Self {
            rows,
            cols,
            grid: vec![None; rows * cols],
        })
    }

    /// Return the number of rows.
    pub fn rows_count(&self) -> usize {
        self.rows
    }

    /// Return the number of columns.
    pub fn columns_count(&self) -> usize {
        self.cols
    }

    /// Convert cell coordinates into an index in the linear grid.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::OutOfBounds`] if the coordinates
    /// are outside the grid.
    fn cell_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds);
        }
        Ok(row * self.cols + col)
    }

    /// Place a tile at the given cell, overwriting any existing occupant.
    ///
    /// The caller must populate every cell before gameplay begins. The
    /// board does not verify completeness; an unpopulated cell only shows
    /// up later as a [`BoardError::EmptyCell`] from [`Board::get_tile`].
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::OutOfBounds`] if the coordinates
    /// are outside the grid.
    pub fn set_tile(&mut self, tile: Tile, row: usize, col: usize) -> Result<(), BoardError> {
        let i: usize = self.cell_index(row, col)?;
        self.grid[i] = Some(tile);
        Ok(())
    }

    /// Return the tile at the given cell.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::OutOfBounds`] if the coordinates
    /// are outside the grid, and [`BoardError::EmptyCell`] if no tile has
    /// been placed in the cell.
    pub fn get_tile(&self, row: usize, col: usize) -> Result<&Tile, BoardError> {
        let i: usize = self.cell_index(row, col)?;
        self.grid[i].as_ref().ok_or(BoardError::EmptyCell)
    }

    /// Whether the given cell holds the blank tile.
    ///
    /// An unpopulated cell is not the blank tile.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::OutOfBounds`] if the coordinates
    /// are outside the grid.
    pub fn is_empty_tile(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        let i: usize = self.cell_index(row, col)?;
        Ok(self.grid[i].is_some_and(|t| t.is_blank()))
    }

    /// Whether the two cells are edge-adjacent on the grid.
    ///
    /// Diagonal cells are not neighbors, the grid does not wrap around,
    /// and a cell is not its own neighbor. Out-of-grid coordinates are
    /// never neighbors.
    pub fn are_tiles_neighbors(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
        if r1 >= self.rows || c1 >= self.cols || r2 >= self.rows || c2 >= self.cols {
            return false;
        }
        r1.abs_diff(r2) + c1.abs_diff(c2) == 1
    }

    /// Exchange the contents of the two cells.
    ///
    /// The tile values travel whole, with their identity and blank flag.
    /// The cells do not have to be neighbors: restricting swaps to the
    /// cells next to the blank is a game rule that the session layer
    /// enforces. Swapping a cell with itself has no effect.
    ///
    /// # Errors
    ///
    /// The method returns [`BoardError::OutOfBounds`] if any of the
    /// coordinates are outside the grid.
    pub fn swap_tiles(
        &mut self,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
    ) -> Result<(), BoardError> {
        let i: usize = self.cell_index(r1, c1)?;
        let j: usize = self.cell_index(r2, c2)?;
        self.grid.swap(i, j);
        Ok(())
    }

    /// Locate the blank tile.
    ///
    /// Return the coordinates of the first blank cell in row-major scan
    /// order, or None if the board has no blank tile yet.
    pub fn blank_position(&self) -> Option<(usize, usize)> {
        self.grid
            .iter()
            .position(|c| c.is_some_and(|t| t.is_blank()))
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Iterate over the cells in row-major order.
    ///
    /// Each item pairs the cell coordinates with the occupying tile, or
    /// with None for an unpopulated cell. Front ends use this iterator to
    /// pull a fresh snapshot of the board after every mutation.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Option<&Tile>)> {
        let cols: usize = self.cols;
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i / cols, i % cols), c.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board populated in ascending order with the blank at the
    /// bottom-right cell.
    fn canonical_board(rows: usize, cols: usize) -> Board {
        let mut board: Board = Board::new(rows, cols).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                let idx: usize = r * cols + c;
                let blank: bool = r == rows - 1 && c == cols - 1;
                board.set_tile(Tile::new(idx, idx, blank), r, c).unwrap();
            }
        }
        board
    }

    fn order_indexes(board: &Board) -> Vec<usize> {
        board
            .cells()
            .map(|(_, t)| t.unwrap().order_index())
            .collect()
    }

    #[test]
    fn test_new_rejects_small_grids() {
        assert_eq!(Board::new(1, 4).unwrap_err(), BoardError::InvalidDimensions);
        assert_eq!(Board::new(4, 1).unwrap_err(), BoardError::InvalidDimensions);
        assert_eq!(Board::new(0, 0).unwrap_err(), BoardError::InvalidDimensions);
        assert!(Board::new(2, 2).is_ok());
    }

    #[test]
    fn test_accessors() {
        let board: Board = Board::new(3, 4).unwrap();
        assert_eq!(board.rows_count(), 3);
        assert_eq!(board.columns_count(), 4);
    }

    #[test]
    fn test_set_and_get_tile() {
        let mut board: Board = Board::new(2, 2).unwrap();
        assert_eq!(board.get_tile(0, 0).unwrap_err(), BoardError::EmptyCell);

        board.set_tile(Tile::new(3, 7, false), 0, 0).unwrap();
        let tile: &Tile = board.get_tile(0, 0).unwrap();
        assert_eq!(tile.order_index(), 3);
        assert_eq!(tile.payload(), 7);
        assert!(!tile.is_blank());

        // Placing a tile overwrites the previous occupant
        board.set_tile(Tile::new(1, 1, true), 0, 0).unwrap();
        assert_eq!(board.get_tile(0, 0).unwrap().order_index(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board: Board = Board::new(3, 3).unwrap();
        assert_eq!(board.get_tile(3, 0).unwrap_err(), BoardError::OutOfBounds);
        assert_eq!(board.get_tile(0, 3).unwrap_err(), BoardError::OutOfBounds);
        assert_eq!(
            board.set_tile(Tile::new(0, 0, false), 9, 9).unwrap_err(),
            BoardError::OutOfBounds
        );
        assert_eq!(board.is_empty_tile(3, 3).unwrap_err(), BoardError::OutOfBounds);
        assert_eq!(board.swap_tiles(0, 0, 0, 3).unwrap_err(), BoardError::OutOfBounds);
    }

    #[test]
    fn test_is_empty_tile() {
        let board: Board = canonical_board(3, 3);
        assert!(board.is_empty_tile(2, 2).unwrap());
        assert!(!board.is_empty_tile(0, 0).unwrap());

        // An unpopulated cell is not the blank tile
        let empty: Board = Board::new(2, 2).unwrap();
        assert!(!empty.is_empty_tile(0, 0).unwrap());
    }

    #[test]
    fn test_neighbors() {
        let board: Board = Board::new(3, 3).unwrap();

        assert!(board.are_tiles_neighbors(2, 1, 2, 2));
        assert!(board.are_tiles_neighbors(0, 0, 1, 0));
        assert!(board.are_tiles_neighbors(1, 1, 0, 1));

        // A cell is not its own neighbor
        assert!(!board.are_tiles_neighbors(1, 1, 1, 1));
        // No diagonal adjacency
        assert!(!board.are_tiles_neighbors(0, 0, 1, 1));
        assert!(!board.are_tiles_neighbors(2, 0, 1, 1));
        // No wraparound
        assert!(!board.are_tiles_neighbors(0, 0, 0, 2));
        assert!(!board.are_tiles_neighbors(0, 0, 2, 0));
        // Out-of-grid coordinates are never neighbors
        assert!(!board.are_tiles_neighbors(2, 2, 2, 3));
    }

    #[test]
    fn test_swap_moves_tile_values() {
        let mut board: Board = canonical_board(3, 3);
        board.swap_tiles(0, 0, 2, 2).unwrap();

        assert_eq!(board.get_tile(0, 0).unwrap().order_index(), 8);
        assert!(board.get_tile(0, 0).unwrap().is_blank());
        assert_eq!(board.get_tile(2, 2).unwrap().order_index(), 0);
        assert!(!board.get_tile(2, 2).unwrap().is_blank());

        // Swapping a cell with itself has no effect
        board.swap_tiles(1, 1, 1, 1).unwrap();
        assert_eq!(board.get_tile(1, 1).unwrap().order_index(), 4);
    }

    #[test]
    fn test_blank_position() {
        let mut board: Board = canonical_board(3, 3);
        assert_eq!(board.blank_position(), Some((2, 2)));

        board.swap_tiles(2, 2, 0, 1).unwrap();
        assert_eq!(board.blank_position(), Some((0, 1)));

        let empty: Board = Board::new(2, 2).unwrap();
        assert_eq!(empty.blank_position(), None);
    }

    #[test]
    fn test_identity_preserved_across_swaps() {
        let mut board: Board = canonical_board(4, 4);

        // Arbitrary swap sequence, adjacent or not
        let swaps: [(usize, usize, usize, usize); 5] =
            [(0, 0, 3, 3), (1, 2, 2, 1), (0, 3, 3, 0), (2, 2, 2, 3), (1, 1, 0, 0)];
        for (r1, c1, r2, c2) in swaps {
            board.swap_tiles(r1, c1, r2, c2).unwrap();

            let mut ids: Vec<usize> = order_indexes(&board);
            ids.sort_unstable();
            assert_eq!(ids, (0..16).collect::<Vec<usize>>());

            let blanks: usize = board
                .cells()
                .filter(|(_, t)| t.is_some_and(|t| t.is_blank()))
                .count();
            assert_eq!(blanks, 1);
        }
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let board: Board = canonical_board(2, 3);
        let coords: Vec<(usize, usize)> = board.cells().map(|(pos, _)| pos).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(order_indexes(&board), vec![0, 1, 2, 3, 4, 5]);
    }
}
