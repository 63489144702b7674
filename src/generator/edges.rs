/*
edges.rs

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

//! Touching edges between adjacent tiles.
//!
//! Two tiles touch when they share a side. For each tile at `(x, y)`:
//!
//! - the tile at `(x + 1, y)` touches its [`Edge::Right`] edge with its [`Edge::Left`] edge.
//! - when the tile points down (odd `x`), the tile at `(x - 1, y + 1)` touches its [`Edge::Top`]
//!   edge with its [`Edge::Bottom`] edge.
//!
//! Only these two directions are tested, so each pair is produced exactly once.

use log::{Level, debug, log_enabled};
use std::collections::btree_map;

use crate::tile::{Edge, Orientation, Tile, Tiles, opposite};

/// Edge of the tile at the given coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub pos: (i32, i32),
    pub edge: Edge,
}

/// Two edges of adjacent tiles that face each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TouchingEdges {
    pub first: EdgeRef,
    pub second: EdgeRef,
}

/// Candidate neighbors, in the order they are tested for each tile.
const NEIGHBORS: [(Edge, i32, i32); 2] = [(Edge::Right, 1, 0), (Edge::Top, -1, 1)];

/// Return an iterator over all the touching edges of the given tiles.
///
/// The iterator does not modify the tiles. Calling this function again on the same, unmodified,
/// tiles produces the same pairs in the same order.
pub fn touching_edges(tiles: &Tiles) -> TouchingEdgesIterator<'_> {
    TouchingEdgesIterator {
        tiles,
        positions: tiles.iter(),
        current: None,
        neighbor: 0,
    }
}

/// Number of touching edges of the given tiles.
pub fn num_touching_edges(tiles: &Tiles) -> usize {
    let count: usize = touching_edges(tiles).count();
    debug!("{} tiles, {count} touching edges", tiles.len());
    count
}

/// Print the touching edges.
pub fn debug(tiles: &Tiles) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    for pair in touching_edges(tiles) {
        debug!(
            "({:>3},{:>3}) {:<6} <--> ({:>3},{:>3}) {}",
            pair.first.pos.0,
            pair.first.pos.1,
            pair.first.edge,
            pair.second.pos.0,
            pair.second.pos.1,
            pair.second.edge
        );
    }
}

/// Iterator over touching edges.
pub struct TouchingEdgesIterator<'a> {
    tiles: &'a Tiles,
    positions: btree_map::Iter<'a, (i32, i32), Tile>,
    current: Option<(i32, i32)>,
    neighbor: usize,
}

/// Iterator implementation.
impl Iterator for TouchingEdgesIterator<'_> {
    type Item = TouchingEdges;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (x, y) = match self.current {
                Some(pos) if self.neighbor < NEIGHBORS.len() => pos,
                _ => {
                    let (pos, _) = self.positions.next()?;
                    self.current = Some(*pos);
                    self.neighbor = 0;
                    *pos
                }
            };

            let (edge, dx, dy) = NEIGHBORS[self.neighbor];
            self.neighbor += 1;

            // Triangles pointing up do not have a top edge
            if edge == Edge::Top && Orientation::of(x) == Orientation::Up {
                continue;
            }

            let other: (i32, i32) = (x + dx, y + dy);
            if self.tiles.contains(other) {
                return Some(TouchingEdges {
                    first: EdgeRef { pos: (x, y), edge },
                    second: EdgeRef {
                        pos: other,
                        edge: opposite(edge),
                    },
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::triangle;
    use std::collections::HashSet;

    #[test]
    fn test_width_one_has_no_touching_edges() {
        let tiles = triangle::build(1).unwrap();
        assert_eq!(num_touching_edges(&tiles), 0);
    }

    #[test]
    fn test_width_three() {
        let tiles = triangle::build(3).unwrap();
        let pairs: Vec<TouchingEdges> = touching_edges(&tiles).collect();
        assert_eq!(
            pairs,
            vec![
                TouchingEdges {
                    first: EdgeRef { pos: (0, 0), edge: Edge::Right },
                    second: EdgeRef { pos: (1, 0), edge: Edge::Left },
                },
                TouchingEdges {
                    first: EdgeRef { pos: (1, 0), edge: Edge::Right },
                    second: EdgeRef { pos: (2, 0), edge: Edge::Left },
                },
                TouchingEdges {
                    first: EdgeRef { pos: (1, 0), edge: Edge::Top },
                    second: EdgeRef { pos: (0, 1), edge: Edge::Bottom },
                },
            ]
        );

        // Enumerating again gives the same pairs in the same order
        let again: Vec<TouchingEdges> = touching_edges(&tiles).collect();
        assert_eq!(pairs, again);
    }

    #[test]
    fn test_pair_counts_follow_the_pyramid_formula() {
        for width in [1, 3, 5, 7, 9, 11] {
            let tiles = triangle::build(width).unwrap();
            let expected: usize = 3 * ((width * width - 1) / 8) as usize;
            assert_eq!(num_touching_edges(&tiles), expected, "width {width}");
        }
    }

    #[test]
    fn test_each_edge_appears_once() {
        let tiles = triangle::build(9).unwrap();
        let mut seen: HashSet<EdgeRef> = HashSet::new();
        for pair in touching_edges(&tiles) {
            assert_ne!(pair.first.pos, pair.second.pos);
            assert_eq!(opposite(pair.first.edge), pair.second.edge);
            assert!(seen.insert(pair.first), "duplicated {:?}", pair.first);
            assert!(seen.insert(pair.second), "duplicated {:?}", pair.second);
        }
    }

    #[test]
    fn test_horizontal_edges_match_orientation() {
        let tiles = triangle::build(7).unwrap();
        for pair in touching_edges(&tiles) {
            for side in [pair.first, pair.second] {
                if matches!(side.edge, Edge::Top | Edge::Bottom) {
                    assert_eq!(Orientation::of(side.pos.0).horizontal_edge(), side.edge);
                }
            }
        }
    }
}
