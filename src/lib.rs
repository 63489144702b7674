/*
lib.rs

Copyright 2025 Hervé Quatremain

This file is part of Tripuzzle.

Tripuzzle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tripuzzle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tripuzzle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate printable puzzle worksheets made of triangular tiles.
//!
//! The edges that two adjacent tiles share carry a question on one side and its answer on the
//! other side. Solving the puzzle consists in cutting the tiles and reassembling them so that
//! each question faces its answer.
//!
//! See [`worksheet::generate`] for the complete pipeline.

pub mod cli_options;
pub mod config;
pub mod draw;
pub mod error;
pub mod generator;
pub mod problems;
pub mod shapes;
pub mod tile;
pub mod worksheet;

pub use config::{OutputFormat, ProblemSelection, ShapeSelection, WorksheetConfig};
pub use error::{PuzzleError, Result};
pub use tile::{Edge, Label, Orientation, Tile, Tiles, opposite};
pub use worksheet::{Worksheet, generate};
