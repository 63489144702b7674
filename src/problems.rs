/*
problems.rs

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

//! Question and answer pairs.
//!
//! A [`ProblemSource`] produces an unbounded stream of [`Problem`] objects for one problem
//! family, such as multiplication or fraction conversion.
//! Sources are combined and filtered by wrapping them:
//!
//! * [`Styled`] attaches a display style (the `--prefix` option) to the problems of a source.
//! * [`weighted::WeightedProblems`] draws from several sources in proportion to their weights.
//! * [`unique::UniqueProblems`] rejects problems whose question or answer was already used.
//!
//! The available problem families are listed by [`registry`].

pub mod fractions;
pub mod multiplication;
pub mod unique;
pub mod weighted;

use rand::RngCore;
use serde::Serialize;
use std::collections::HashSet;

use crate::error::Result;
use crate::generator::registry::{Entry, Registry};

/// Question and its answer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub question: String,
    pub answer: String,

    /// Display style, such as a color name, applied to both the question and the answer.
    pub style: Option<String>,
}

impl Problem {
    /// Create a [`Problem`] object with no style.
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            style: None,
        }
    }
}

/// Unbounded producer of problems for a problem family.
///
/// Sources never run out: [`ProblemSource::next_problem`] can be called any number of times.
/// Consecutive problems are not guaranteed to be different.
pub trait ProblemSource {
    /// Draw the next problem.
    fn next_problem(&mut self, rng: &mut dyn RngCore) -> Problem;

    /// Upper bound of the number of distinct problems the source can produce, if known.
    fn capacity(&self) -> Option<u128> {
        None
    }

    /// All the answers the source can produce, if there are at most `limit` of them.
    ///
    /// Each accepted problem on a worksheet has a new answer, so the number of answers bounds the
    /// number of distinct problems. Answers do not carry the style: a family selected twice with
    /// different prefixes produces the same answers.
    fn answers(&self, _limit: usize) -> Option<HashSet<String>> {
        None
    }
}

impl<S: ProblemSource + ?Sized> ProblemSource for Box<S> {
    fn next_problem(&mut self, rng: &mut dyn RngCore) -> Problem {
        (**self).next_problem(rng)
    }

    fn capacity(&self) -> Option<u128> {
        (**self).capacity()
    }

    fn answers(&self, limit: usize) -> Option<HashSet<String>> {
        (**self).answers(limit)
    }
}

/// Source wrapper that sets the style of each problem.
pub struct Styled<S> {
    source: S,
    style: String,
}

impl<S: ProblemSource> Styled<S> {
    /// Create a [`Styled`] object.
    pub fn new(source: S, style: &str) -> Self {
        Self {
            source,
            style: String::from(style),
        }
    }
}

impl<S: ProblemSource> ProblemSource for Styled<S> {
    fn next_problem(&mut self, rng: &mut dyn RngCore) -> Problem {
        let mut problem: Problem = self.source.next_problem(rng);
        problem.style = Some(self.style.clone());
        problem
    }

    fn capacity(&self) -> Option<u128> {
        self.source.capacity()
    }

    fn answers(&self, limit: usize) -> Option<HashSet<String>> {
        self.source.answers(limit)
    }
}

/// Build a problem source from its positional arguments.
pub type ProblemFactory = fn(&[String]) -> Result<Box<dyn ProblemSource>>;

/// Problem families indexed by name.
pub type ProblemRegistry = Registry<ProblemFactory>;

/// Return the registry of the available problem families.
pub fn registry() -> ProblemRegistry {
    let mut problems: ProblemRegistry = Registry::new();

    // For developers: add your new problem family to the list.
    problems.register(Entry {
        name: multiplication::NAME,
        description: multiplication::DESCRIPTION,
        usage: multiplication::USAGE,
        factory: multiplication::from_args,
    });
    problems.register(Entry {
        name: fractions::NAME,
        description: fractions::DESCRIPTION,
        usage: fractions::USAGE,
        factory: fractions::from_args,
    });

    problems
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Source that numbers its problems, optionally wrapping around after `period` problems.
    pub(crate) struct Counter {
        pub(crate) next: usize,
        pub(crate) period: Option<usize>,
        pub(crate) label: &'static str,
    }

    impl Counter {
        pub(crate) fn new(label: &'static str) -> Self {
            Self {
                next: 0,
                period: None,
                label,
            }
        }
    }

    impl ProblemSource for Counter {
        fn next_problem(&mut self, _rng: &mut dyn RngCore) -> Problem {
            let n: usize = match self.period {
                Some(p) => self.next % p,
                None => self.next,
            };
            self.next += 1;
            Problem::new(
                format!("{}q{n}", self.label),
                format!("{}a{n}", self.label),
            )
        }

        fn capacity(&self) -> Option<u128> {
            self.period.map(|p| p as u128)
        }

        fn answers(&self, limit: usize) -> Option<HashSet<String>> {
            let period: usize = self.period.filter(|&p| p <= limit)?;
            Some((0..period).map(|n| format!("{}a{n}", self.label)).collect())
        }
    }

    #[test]
    fn test_styled() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let mut source = Styled::new(Counter::new(""), "red");
        let problem: Problem = source.next_problem(&mut rng);
        assert_eq!(problem.question, "q0");
        assert_eq!(problem.answer, "a0");
        assert_eq!(problem.style.as_deref(), Some("red"));
        assert_eq!(source.capacity(), None);
    }

    #[test]
    fn test_boxed_source() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let mut source: Box<dyn ProblemSource> = Box::new(Counter {
            next: 0,
            period: Some(2),
            label: "x",
        });
        assert_eq!(source.capacity(), Some(2));
        assert_eq!(
            source.answers(10),
            Some(HashSet::from([String::from("xa0"), String::from("xa1")]))
        );
        assert_eq!(source.answers(1), None);
        source.next_problem(&mut rng);
        source.next_problem(&mut rng);
        assert_eq!(source.next_problem(&mut rng).question, "xq0");
    }

    #[test]
    fn test_registry() {
        let problems: ProblemRegistry = registry();
        assert_eq!(
            problems.names(),
            vec!["fraction_conversion", "multidigit_multiplication"]
        );
        let entry = problems.get("multidigit_multiplication").unwrap();
        let source: Box<dyn ProblemSource> =
            (entry.factory)(&[String::from("1"), String::from("1")]).unwrap();
        assert_eq!(source.capacity(), Some(31));
        let answers: HashSet<String> = source.answers(100).unwrap();
        assert_eq!(answers.len(), 31);
        assert!(answers.contains("$12$"));
    }
}
