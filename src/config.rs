/*
config.rs

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

//! Build constants.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Notice displayed by the `--version` command-line option.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain

Taquin is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.";
