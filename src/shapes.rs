/*
shapes.rs

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

//! Arrangements of triangular tiles.
//!
//! A shape builder takes its positional arguments from the command line and returns the
//! [`Tiles`] collection of the shape. Builders are pure: they do not use randomness, so the same
//! arguments always produce the same tiles.
//!
//! The available shapes are listed by [`registry`].

pub mod parallelogram;
pub mod triangle;

use crate::error::Result;
use crate::generator::registry::{Entry, Registry};
use crate::tile::Tiles;

/// Build a shape from its positional arguments.
pub type ShapeFactory = fn(&[String]) -> Result<Tiles>;

/// Shapes indexed by name.
pub type ShapeRegistry = Registry<ShapeFactory>;

/// Return the registry of the available shapes.
pub fn registry() -> ShapeRegistry {
    let mut shapes: ShapeRegistry = Registry::new();

    // For developers: add your new shape to the list.
    shapes.register(Entry {
        name: triangle::NAME,
        description: triangle::DESCRIPTION,
        usage: triangle::USAGE,
        factory: triangle::from_args,
    });
    shapes.register(Entry {
        name: parallelogram::NAME,
        description: parallelogram::DESCRIPTION,
        usage: parallelogram::USAGE,
        factory: parallelogram::from_args,
    });

    shapes
}
