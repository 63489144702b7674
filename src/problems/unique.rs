/*
unique.rs

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

//! Filter out problems that were already used.

use log::debug;
use rand::RngCore;
use std::collections::HashSet;

use super::{Problem, ProblemSource};
use crate::config::MAX_UNIQUE_ATTEMPTS;
use crate::error::{PuzzleError, Result};

/// Source wrapper that only lets through problems with a new question and a new answer.
///
/// A question or an answer is rejected when the same text was already used, either as a
/// question or as an answer. This way, each question on a worksheet has exactly one matching
/// answer.
pub struct UniqueProblems<S> {
    source: S,

    /// Question and answer strings already used.
    used: HashSet<String>,

    /// Number of consecutive rejected problems before giving up.
    max_attempts: usize,
}

impl<S: ProblemSource> UniqueProblems<S> {
    /// Create a [`UniqueProblems`] object.
    pub fn new(source: S) -> Self {
        Self::with_max_attempts(source, MAX_UNIQUE_ATTEMPTS)
    }

    /// Create a [`UniqueProblems`] object that gives up after `max_attempts` consecutive
    /// duplicates.
    pub fn with_max_attempts(source: S, max_attempts: usize) -> Self {
        Self {
            source,
            used: HashSet::new(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Draw the next problem not seen before.
    ///
    /// Return [`None`] if the source only produced already used problems during the allowed
    /// number of attempts.
    pub fn try_next(&mut self, rng: &mut dyn RngCore) -> Option<Problem> {
        for _ in 0..self.max_attempts {
            let problem: Problem = self.source.next_problem(rng);
            if self.used.contains(&problem.question) || self.used.contains(&problem.answer) {
                continue;
            }
            self.used.insert(problem.question.clone());
            self.used.insert(problem.answer.clone());
            return Some(problem);
        }
        None
    }

    /// Draw `count` distinct problems.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::UniqueExhausted`] if the source cannot provide enough
    /// distinct problems. No partial list is returned.
    pub fn take(&mut self, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Problem>> {
        let mut problems: Vec<Problem> = Vec::with_capacity(count);
        while problems.len() < count {
            match self.try_next(rng) {
                Some(problem) => problems.push(problem),
                None => {
                    debug!(
                        "Gave up after {} duplicated problems ({} of {count} found)",
                        self.max_attempts,
                        problems.len()
                    );
                    return Err(PuzzleError::UniqueExhausted {
                        required: count,
                        produced: problems.len(),
                    });
                }
            }
        }
        Ok(problems)
    }

    /// Capacity of the wrapped source.
    pub fn capacity(&self) -> Option<u128> {
        self.source.capacity()
    }
}
