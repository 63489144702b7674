/*
tile.rs

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

//! Triangular tiles and their labeled edges.
//!
//! A puzzle is a [`Tiles`] collection indexed by `(x, y)` coordinates.
//! In row `y`, the tiles alternate between triangles pointing up (even `x`) and triangles
//! pointing down (odd `x`):
//!
//! ```text
//!         /\
//!        /02\
//!       /____\
//!      /\    /\
//!     /01\11/21\
//!    /____\/____\
//!   /\    /\    /\
//!  /00\10/20\30/40\
//! /____\/____\/____\
//! ```
//!
//! A triangle pointing up exposes its [`Edge::Bottom`] edge, a triangle pointing down exposes its
//! [`Edge::Top`] edge. Both expose [`Edge::Left`] and [`Edge::Right`].

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use strum_macros::{Display, EnumIter};

/// Maximum number of labeled edges on a triangle.
pub const MAX_EDGES: usize = 3;

/// Side of a triangular tile.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Edge {
    /// Horizontal edge of a triangle pointing down.
    ///
    /// ```text
    ///    |
    ///   \|/
    /// ______
    /// \    /
    ///  \  /
    ///   \/
    /// ```
    Top,

    /// Horizontal edge of a triangle pointing up.
    ///
    /// ```text
    ///   /\
    ///  /  \
    /// /____\
    ///   /|\
    ///    |
    /// ```
    Bottom,

    /// ```text
    ///                    ______
    ///      /\            \    /
    /// --> /  \    or  --> \  /
    ///    /____\            \/
    /// ```
    Left,

    /// ```text
    ///                 ______
    ///   /\            \    /
    ///  /  \ <--   or   \  / <--
    /// /____\            \/
    /// ```
    Right,
}

/// Return the edge that faces the given edge on the adjacent tile.
pub fn opposite(edge: Edge) -> Edge {
    match edge {
        Edge::Top => Edge::Bottom,
        Edge::Bottom => Edge::Top,
        Edge::Left => Edge::Right,
        Edge::Right => Edge::Left,
    }
}

/// Direction a triangle points to.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Up,
    Down,
}

impl Orientation {
    /// Orientation of the tile in column `x`.
    pub fn of(x: i32) -> Self {
        if x.rem_euclid(2) == 0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }

    /// The horizontal edge (top or bottom) that a triangle with this orientation exposes.
    pub fn horizontal_edge(self) -> Edge {
        match self {
            Orientation::Up => Edge::Bottom,
            Orientation::Down => Edge::Top,
        }
    }
}

/// Text written along a tile edge.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Question or answer text.
    pub text: String,

    /// Optional display style, such as a color name.
    pub style: Option<String>,
}

impl Label {
    /// Create a [`Label`] object.
    pub fn new(text: &str, style: Option<&str>) -> Self {
        Self {
            text: String::from(text),
            style: style.map(String::from),
        }
    }
}

/// Single tile in a puzzle.
///
/// The tile does not know its orientation. It is the responsibility of the caller to label only
/// the edges that make sense for the tile position.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Tile {
    edges: BTreeMap<Edge, Label>,
}

impl Tile {
    /// Create a [`Tile`] object with no labeled edges.
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// Set the label of an edge of the tile.
    ///
    /// # Panics
    ///
    /// Labeling the same edge twice, labeling both the top and bottom edges, or labeling more
    /// than three edges is a bug in the caller and panics.
    pub fn set_edge(&mut self, edge: Edge, label: Label) {
        assert!(
            !self.edges.contains_key(&edge),
            "Edge {edge} is already labeled"
        );
        assert!(
            self.edges.len() < MAX_EDGES,
            "A tile cannot have more than {MAX_EDGES} labeled edges"
        );
        assert!(
            !(matches!(edge, Edge::Top | Edge::Bottom) && self.edges.contains_key(&opposite(edge))),
            "A tile cannot have both a top and a bottom edge"
        );
        self.edges.insert(edge, label);
    }

    /// Return the label of the given edge, if labeled.
    pub fn get_edge(&self, edge: Edge) -> Option<&Label> {
        self.edges.get(&edge)
    }

    /// Number of labeled edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over the labeled edges.
    pub fn edges(&self) -> btree_map::Iter<'_, Edge, Label> {
        self.edges.iter()
    }
}

/// Collection of tiles indexed by their `(x, y)` coordinates.
///
/// The collection is created once by a shape builder. Afterwards, only the edge labels change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tiles {
    tiles: BTreeMap<(i32, i32), Tile>,
}

impl Tiles {
    /// Create a [`Tiles`] object with an unlabeled tile at each of the given coordinates.
    ///
    /// Duplicated coordinates produce a single tile.
    pub fn from_coordinates<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let tiles: BTreeMap<(i32, i32), Tile> = coordinates
            .into_iter()
            .map(|pos| (pos, Tile::new()))
            .collect();
        debug!("Created {} tiles", tiles.len());
        Self { tiles }
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the collection has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether a tile exists at the given coordinates.
    pub fn contains(&self, pos: (i32, i32)) -> bool {
        self.tiles.contains_key(&pos)
    }

    /// Return the tile at the given coordinates.
    pub fn get(&self, pos: (i32, i32)) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Return the tile at the given coordinates for labeling its edges.
    pub fn get_mut(&mut self, pos: (i32, i32)) -> Option<&mut Tile> {
        self.tiles.get_mut(&pos)
    }

    /// Iterate over the coordinates of the tiles, in a stable order (by `x`, then by `y`).
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.tiles.keys().copied()
    }

    /// Iterate over the tiles and their coordinates, in the same order as [`Tiles::positions`].
    pub fn iter(&self) -> btree_map::Iter<'_, (i32, i32), Tile> {
        self.tiles.iter()
    }

    /// Total number of labeled edges over all the tiles.
    pub fn num_labeled_edges(&self) -> usize {
        self.tiles.values().map(Tile::num_edges).sum()
    }

    /// Print the tiles and their labels.
    pub fn debug(&self) {
        let mut s: String = String::new();
        for ((x, y), tile) in &self.tiles {
            s.clear();
            s.push_str(&format!("({x:>3},{y:>3}) {:<4} -->", Orientation::of(*x)));
            for (edge, label) in &tile.edges {
                match &label.style {
                    Some(style) => s.push_str(&format!(" {edge}=[{style}]{}", label.text)),
                    None => s.push_str(&format!(" {edge}={}", label.text)),
                }
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn label(text: &str) -> Label {
        Label::new(text, None)
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for edge in Edge::iter() {
            assert_ne!(opposite(edge), edge);
            assert_eq!(opposite(opposite(edge)), edge);
        }
        assert_eq!(opposite(Edge::Top), Edge::Bottom);
        assert_eq!(opposite(Edge::Left), Edge::Right);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::of(0), Orientation::Up);
        assert_eq!(Orientation::of(1), Orientation::Down);
        assert_eq!(Orientation::of(-1), Orientation::Down);
        assert_eq!(Orientation::of(-2), Orientation::Up);
        assert_eq!(Orientation::Up.horizontal_edge(), Edge::Bottom);
        assert_eq!(Orientation::Down.horizontal_edge(), Edge::Top);
    }

    #[test]
    fn test_set_three_edges() {
        let mut tile = Tile::new();
        tile.set_edge(Edge::Left, label("a"));
        tile.set_edge(Edge::Right, Label::new("b", Some("red")));
        tile.set_edge(Edge::Top, label("c"));
        assert_eq!(tile.num_edges(), 3);
        assert_eq!(tile.get_edge(Edge::Right).unwrap().style.as_deref(), Some("red"));
        assert!(tile.get_edge(Edge::Bottom).is_none());
    }

    #[test]
    #[should_panic(expected = "already labeled")]
    fn test_same_edge_twice_panics() {
        let mut tile = Tile::new();
        tile.set_edge(Edge::Left, label("a"));
        tile.set_edge(Edge::Left, label("b"));
    }

    #[test]
    #[should_panic(expected = "both a top and a bottom")]
    fn test_top_and_bottom_panics() {
        let mut tile = Tile::new();
        tile.set_edge(Edge::Bottom, label("a"));
        tile.set_edge(Edge::Top, label("b"));
    }

    #[test]
    #[should_panic(expected = "more than 3")]
    fn test_fourth_edge_panics() {
        let mut tile = Tile::new();
        tile.set_edge(Edge::Left, label("a"));
        tile.set_edge(Edge::Right, label("b"));
        tile.set_edge(Edge::Top, label("c"));
        tile.set_edge(Edge::Bottom, label("d"));
    }

    #[test]
    fn test_tiles_from_coordinates() {
        let tiles = Tiles::from_coordinates([(0, 0), (1, 0), (0, 1), (1, 0)]);
        assert_eq!(tiles.len(), 3);
        assert!(tiles.contains((0, 1)));
        assert!(!tiles.contains((2, 0)));
        let positions: Vec<(i32, i32)> = tiles.positions().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0)]);
        assert_eq!(tiles.num_labeled_edges(), 0);
    }
}
