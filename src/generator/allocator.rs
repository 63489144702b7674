/*
allocator.rs

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

//! Place questions and answers on the touching edges of the tiles.
//!
//! For `N` touching edges, the allocator draws `N` distinct problems, shuffles them, and binds
//! one problem to each pair of touching edges. For each pair, a coin flip decides which edge gets
//! the question and which edge gets the answer.

use log::{Level, debug, log_enabled};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::edges::{self, EdgeRef, TouchingEdges};
use crate::error::Result;
use crate::problems::unique::UniqueProblems;
use crate::problems::{Problem, ProblemSource};
use crate::tile::{Label, Tiles};

/// Label all the touching edges of the tiles with questions and answers.
///
/// Return the number of problems placed on the tiles.
///
/// # Errors
///
/// The function returns an error, before labeling any edge, if the source cannot provide enough
/// distinct problems.
///
/// # Panics
///
/// The tiles must not have labeled edges yet.
pub fn add_questions<S: ProblemSource>(
    tiles: &mut Tiles,
    problems: &mut UniqueProblems<S>,
    rng: &mut dyn RngCore,
) -> Result<usize> {
    // Draw a problem for each pair of touching edges, in random order
    let num_problems: usize = edges::num_touching_edges(tiles);
    edges::debug(tiles);
    let mut selected: Vec<Problem> = problems.take(num_problems, rng)?;
    selected.shuffle(rng);

    let pairs: Vec<TouchingEdges> = edges::touching_edges(tiles).collect();
    for (pair, problem) in pairs.into_iter().zip(selected) {
        // Randomly choose which edge gets the question and which gets the answer
        let (question_side, answer_side) = if rng.random_bool(0.5) {
            (pair.first, pair.second)
        } else {
            (pair.second, pair.first)
        };
        debug!(
            "Question {:?} on {:?}, answer {:?} on {:?}",
            problem.question, question_side, problem.answer, answer_side
        );

        let style: Option<&str> = problem.style.as_deref();
        set_label(tiles, question_side, Label::new(&problem.question, style));
        set_label(tiles, answer_side, Label::new(&problem.answer, style));
    }

    if log_enabled!(Level::Debug) {
        tiles.debug();
    }
    Ok(num_problems)
}

/// Label the given edge.
fn set_label(tiles: &mut Tiles, side: EdgeRef, label: Label) {
    tiles
        .get_mut(side.pos)
        .expect("Touching edges always refer to existing tiles")
        .set_edge(side.edge, label);
}
