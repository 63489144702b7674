/*
weighted.rs

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

//! Draw problems from several sources in proportion to their weights.

use log::{debug, trace};
use rand::{Rng, RngCore};
use std::collections::HashSet;

use super::{Problem, ProblemSource};
use crate::config::MAX_ENUMERATED_PROBLEMS;
use crate::error::{PuzzleError, Result};

/// Multiplexer over weighted problem sources.
///
/// For each problem, a source is selected with a probability of `weight / total_weight`.
/// Weights do not have to sum to 1.
pub struct WeightedProblems {
    sources: Vec<(Box<dyn ProblemSource>, f64)>,
    total_weight: f64,
}

impl WeightedProblems {
    /// Create a [`WeightedProblems`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the list is empty, or if a weight is not a positive finite
    /// number. A source with a zero weight could never be selected.
    pub fn new(sources: Vec<(Box<dyn ProblemSource>, f64)>) -> Result<Self> {
        if sources.is_empty() {
            return Err(PuzzleError::NoProblemSources);
        }
        if let Some((_, w)) = sources.iter().find(|(_, w)| !(w.is_finite() && *w > 0.0)) {
            return Err(PuzzleError::InvalidWeight(*w));
        }
        let total_weight: f64 = sources.iter().map(|(_, w)| w).sum();
        debug!(
            "{} problem sources, total weight {total_weight}",
            sources.len()
        );
        Ok(Self {
            sources,
            total_weight,
        })
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether there are no sources. Always `false` for a successfully created object.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Sum of the weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Randomly select a source and return its index.
    pub fn pick_source(&self, rng: &mut dyn RngCore) -> usize {
        let mut threshold: f64 = rng.random::<f64>() * self.total_weight;
        for (i, (_, w)) in self.sources.iter().enumerate() {
            threshold -= w;
            if threshold < 0.0 {
                return i;
            }
        }
        // Rounding errors can leave a tiny positive threshold after the last source
        self.sources.len() - 1
    }
}

impl ProblemSource for WeightedProblems {
    fn next_problem(&mut self, rng: &mut dyn RngCore) -> Problem {
        let i: usize = self.pick_source(rng);
        trace!("Drawing from source {i}");
        self.sources[i].0.next_problem(rng)
    }

    /// Number of distinct answers over all the sources.
    ///
    /// When the answers of a source cannot be listed, this is the sum of the capacities, or
    /// [`None`] if the capacity of a source is unknown.
    fn capacity(&self) -> Option<u128> {
        if let Some(answers) = self.answers(MAX_ENUMERATED_PROBLEMS) {
            debug!("{} distinct answers", answers.len());
            return Some(answers.len() as u128);
        }
        self.sources
            .iter()
            .try_fold(0_u128, |acc, (s, _)| acc.checked_add(s.capacity()?))
    }

    fn answers(&self, limit: usize) -> Option<HashSet<String>> {
        let mut answers: HashSet<String> = HashSet::new();
        for (source, _) in &self.sources {
            answers.extend(source.answers(limit)?);
            if answers.len() > limit {
                return None;
            }
        }
        Some(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::Styled;
    use crate::problems::tests::Counter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn counter(label: &'static str) -> Box<dyn ProblemSource> {
        Box::new(Counter::new(label))
    }

    #[test]
    fn test_three_to_one_ratio() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let mut problems =
            WeightedProblems::new(vec![(counter("A"), 3.0), (counter("B"), 1.0)]).unwrap();
        assert_eq!(problems.total_weight(), 4.0);

        let mut count_a: usize = 0;
        let mut count_b: usize = 0;
        for _ in 0..10_000 {
            let problem: Problem = problems.next_problem(&mut rng);
            if problem.question.starts_with('A') {
                count_a += 1;
            } else {
                count_b += 1;
            }
        }
        assert_eq!(count_a + count_b, 10_000);
        let ratio: f64 = count_a as f64 / count_b as f64;
        assert!((2.7..=3.3).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_sources_advance_independently() {
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        let mut problems =
            WeightedProblems::new(vec![(counter("A"), 0.5), (counter("B"), 0.5)]).unwrap();
        let mut next_a: usize = 0;
        let mut next_b: usize = 0;
        for _ in 0..200 {
            let problem: Problem = problems.next_problem(&mut rng);
            if problem.question.starts_with('A') {
                assert_eq!(problem.question, format!("Aq{next_a}"));
                next_a += 1;
            } else {
                assert_eq!(problem.question, format!("Bq{next_b}"));
                next_b += 1;
            }
        }
        assert!(next_a > 0 && next_b > 0);
    }

    #[test]
    fn test_single_source() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let problems = WeightedProblems::new(vec![(counter("A"), 0.01)]).unwrap();
        for _ in 0..100 {
            assert_eq!(problems.pick_source(&mut rng), 0);
        }
    }

    #[test]
    fn test_invalid_weights() {
        for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let res = WeightedProblems::new(vec![(counter("A"), 1.0), (counter("B"), w)]);
            assert!(matches!(res, Err(PuzzleError::InvalidWeight(_))));
        }
        assert!(matches!(
            WeightedProblems::new(Vec::new()),
            Err(PuzzleError::NoProblemSources)
        ));
    }

    fn bounded(period: usize, label: &'static str) -> Box<dyn ProblemSource> {
        Box::new(Counter {
            next: 0,
            period: Some(period),
            label,
        })
    }

    fn styled(source: Box<dyn ProblemSource>, style: &str) -> Box<dyn ProblemSource> {
        Box::new(Styled::new(source, style))
    }

    #[test]
    fn test_capacity() {
        let problems =
            WeightedProblems::new(vec![(bounded(3, "A"), 1.0), (bounded(4, "B"), 2.0)]).unwrap();
        assert_eq!(problems.capacity(), Some(7));

        let problems =
            WeightedProblems::new(vec![(bounded(3, "A"), 1.0), (counter("A"), 2.0)]).unwrap();
        assert_eq!(problems.capacity(), None);
    }

    #[test]
    fn test_shared_answers_are_counted_once() {
        // Same family selected twice with different styles
        let problems = WeightedProblems::new(vec![
            (styled(bounded(4, "A"), "red"), 1.0),
            (styled(bounded(4, "A"), "blue"), 1.0),
        ])
        .unwrap();
        assert_eq!(problems.capacity(), Some(4));

        let problems =
            WeightedProblems::new(vec![(bounded(3, "A"), 1.0), (bounded(5, "A"), 1.0)]).unwrap();
        assert_eq!(problems.capacity(), Some(5));
        assert_eq!(problems.answers(4), None);
    }
}
