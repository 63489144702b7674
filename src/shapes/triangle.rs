/*
triangle.rs

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

//! Triangular pyramid of tiles.

use log::debug;

use crate::error::{PuzzleError, Result};
use crate::generator::registry::parse_arg;
use crate::tile::Tiles;

pub const NAME: &str = "triangle";

pub const USAGE: &str = "WIDTH";

pub const DESCRIPTION: &str = r"A triangular pyramid of tiles. WIDTH is the number of tiles in the
bottom row and must be odd. For example, with WIDTH = 5:

        /\
       /02\
      /____\
     /\    /\
    /01\11/21\
   /____\/____\
  /\    /\    /\
 /00\10/20\30/40\
/____\/____\/____\";

/// Largest accepted width.
const MAX_WIDTH: i64 = 999;

/// Build the pyramid from its command-line arguments.
pub fn from_args(args: &[String]) -> Result<Tiles> {
    let [width] = args else {
        return Err(PuzzleError::shape_args(
            NAME,
            format!("expected {USAGE}, got {} arguments", args.len()),
        ));
    };
    let width: i64 = parse_arg(width, "WIDTH").map_err(|e| PuzzleError::shape_args(NAME, e))?;
    build(width)
}

/// Build a pyramid of the given width.
///
/// Row `y` (from the bottom) has `width - 2y` tiles, at `x` from 0. The pyramid has
/// `((width + 1) / 2)²` tiles.
///
/// # Errors
///
/// The width must be odd and positive.
pub fn build(width: i64) -> Result<Tiles> {
    if width <= 0 || width % 2 == 0 {
        return Err(PuzzleError::InvalidWidth(width));
    }
    if width > MAX_WIDTH {
        return Err(PuzzleError::shape_args(
            NAME,
            format!("the width cannot be larger than {MAX_WIDTH}"),
        ));
    }
    let width: i32 = width as i32;

    let tiles: Tiles = Tiles::from_coordinates(
        (0..width).flat_map(|y| (0..(width - 2 * y).max(0)).map(move |x| (x, y))),
    );
    debug!("Triangle of width {width}: {} tiles", tiles.len());
    Ok(tiles)
}
