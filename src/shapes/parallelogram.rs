/*
parallelogram.rs

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

//! Parallelogram of tiles.

use log::debug;

use crate::error::{PuzzleError, Result};
use crate::generator::registry::parse_arg;
use crate::tile::Tiles;

pub const NAME: &str = "parallelogram";

pub const USAGE: &str = "WIDTH HEIGHT";

pub const DESCRIPTION: &str = r"A parallelogram of HEIGHT rows, each row with WIDTH tiles pointing
up and WIDTH tiles pointing down. For example, with WIDTH = 2 and HEIGHT = 2:

     ____________
    /\    /\    /
   /01\11/21\31/
  /____\/____\/
 /\    /\    /
/00\10/20\30/
/____\/____\/";

/// Maximum number of tiles in a row or number of rows.
const MAX_SIZE: i64 = 1000;

/// Build the parallelogram from its command-line arguments.
pub fn from_args(args: &[String]) -> Result<Tiles> {
    let [width, height] = args else {
        return Err(PuzzleError::shape_args(
            NAME,
            format!("expected {USAGE}, got {} arguments", args.len()),
        ));
    };
    let width: i64 = parse_arg(width, "WIDTH").map_err(|e| PuzzleError::shape_args(NAME, e))?;
    let height: i64 = parse_arg(height, "HEIGHT").map_err(|e| PuzzleError::shape_args(NAME, e))?;
    build(width, height)
}

/// Build a parallelogram with `height` rows of `2 * width` tiles.
///
/// # Errors
///
/// The width and height must be positive.
pub fn build(width: i64, height: i64) -> Result<Tiles> {
    if !(1..=MAX_SIZE).contains(&width) || !(1..=MAX_SIZE).contains(&height) {
        return Err(PuzzleError::shape_args(
            NAME,
            format!("width and height must be between 1 and {MAX_SIZE}, got {width} and {height}"),
        ));
    }
    let width: i32 = 2 * width as i32;
    let height: i32 = height as i32;

    let tiles: Tiles =
        Tiles::from_coordinates((0..height).flat_map(|y| (0..width).map(move |x| (x, y))));
    debug!("Parallelogram of {height} rows: {} tiles", tiles.len());
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::edges::num_touching_edges;

    #[test]
    fn test_tile_and_edge_counts() {
        let tiles: Tiles = build(2, 2).unwrap();
        assert_eq!(tiles.len(), 8);

        // 3 left/right pairs per row, 2 top/bottom pairs between the rows
        assert_eq!(num_touching_edges(&tiles), 8);

        let tiles: Tiles = build(1, 1).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(num_touching_edges(&tiles), 1);
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(build(0, 2).is_err());
        assert!(build(2, -1).is_err());
        assert!(from_args(&[String::from("2")]).is_err());
        assert_eq!(
            from_args(&[String::from("3"), String::from("1")])
                .unwrap()
                .len(),
            6
        );
    }
}
