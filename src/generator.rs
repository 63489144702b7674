/*
generator.rs

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

//! Place problems on the touching edges of a tile arrangement.
//!
//! A worksheet is generated in three steps:
//!
//! * A shape builder from [`crate::shapes`] creates the [`crate::tile::Tiles`] collection.
//! * [`edges::touching_edges`] lists the pairs of edges that face each other.
//!   There must be one problem for each pair.
//! * [`allocator::add_questions`] draws the problems from a
//!   [`crate::problems::ProblemSource`] and writes the questions and answers on the tiles.
//!
//! Shapes and problem families are looked up by name through a [`registry::Registry`].

pub mod allocator;
pub mod edges;
pub mod registry;
