/*
multiplication.rs

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

//! Multi-digit multiplication problems.

use log::debug;
use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::{Problem, ProblemSource};
use crate::config::MAX_ENUMERATED_PROBLEMS;
use crate::error::{PuzzleError, Result};
use crate::generator::registry::parse_arg;

pub const NAME: &str = "multidigit_multiplication";

pub const USAGE: &str = "DIGITS [DIGITS...]";

pub const DESCRIPTION: &str = r"Multiplication problems. Each DIGITS is the number of digits of a
term. For example, '1 2 3' generates three-term problems with a one-digit, a
two-digit, and a three-digit number. Numbers such as 1, 10, or 100 are never
used.";

/// Maximum number of terms in a problem.
const MAX_TERMS: usize = 4;

/// Maximum number of digits of a term. With four terms, the product still fits in a `u128`.
const MAX_DIGITS: u32 = 9;

/// Source of multiplication problems.
#[derive(Debug, Clone)]
pub struct Multiplication {
    /// Range of values for each term.
    ranges: Vec<RangeInclusive<u64>>,
}

impl Multiplication {
    /// Create a [`Multiplication`] object.
    ///
    /// Each item in `num_digits` is the number of digits of a term.
    /// A term with `d` digits is drawn from `[10^(d-1) + 1, 10^d - 1]`.
    ///
    /// # Errors
    ///
    /// The method returns an error if there are no terms, more than four terms, or a term with no
    /// digits or more than nine digits.
    pub fn new(num_digits: &[u32]) -> Result<Self> {
        if num_digits.is_empty() || num_digits.len() > MAX_TERMS {
            return Err(PuzzleError::problem_args(
                NAME,
                format!(
                    "between 1 and {MAX_TERMS} terms are required, got {}",
                    num_digits.len()
                ),
            ));
        }
        if let Some(d) = num_digits.iter().find(|&&d| d == 0 || d > MAX_DIGITS) {
            return Err(PuzzleError::problem_args(
                NAME,
                format!("the number of digits must be between 1 and {MAX_DIGITS}, got {d}"),
            ));
        }

        let ranges: Vec<RangeInclusive<u64>> = num_digits
            .iter()
            .map(|&d| (10_u64.pow(d - 1) + 1)..=(10_u64.pow(d) - 1))
            .collect();
        debug!("Multiplication terms: {ranges:?}");
        Ok(Self { ranges })
    }

    /// Number of possible combinations of terms.
    fn num_combinations(&self) -> Option<u128> {
        self.ranges.iter().try_fold(1_u128, |acc, r| {
            acc.checked_mul((r.end() - r.start() + 1) as u128)
        })
    }

    /// Distinct products, if there are at most `limit` combinations of terms.
    ///
    /// Different combinations can have the same product, such as 2 x 6 and 3 x 4.
    fn products(&self, limit: usize) -> Option<HashSet<u128>> {
        if self.num_combinations()? > limit as u128 {
            return None;
        }
        let mut products: HashSet<u128> = HashSet::from([1]);
        for range in &self.ranges {
            products = products
                .iter()
                .flat_map(|&p| range.clone().map(move |n| p * n as u128))
                .collect();
        }
        Some(products)
    }
}

/// Build the source from its command-line arguments.
pub fn from_args(args: &[String]) -> Result<Box<dyn ProblemSource>> {
    let num_digits: Vec<u32> = args
        .iter()
        .map(|a| parse_arg::<u32>(a, "DIGITS"))
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| PuzzleError::problem_args(NAME, e))?;
    Ok(Box::new(Multiplication::new(&num_digits)?))
}

impl ProblemSource for Multiplication {
    fn next_problem(&mut self, rng: &mut dyn RngCore) -> Problem {
        let numbers: Vec<u64> = self
            .ranges
            .iter()
            .map(|r| rng.random_range(r.clone()))
            .collect();
        let product: u128 = numbers.iter().map(|&n| n as u128).product();
        let terms: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();

        Problem::new(
            format!("${}$", terms.join(r" \times ")),
            format!("${product}$"),
        )
    }

    /// Number of distinct products. With too many combinations of terms to list them, the number
    /// of combinations.
    fn capacity(&self) -> Option<u128> {
        match self.products(MAX_ENUMERATED_PROBLEMS) {
            Some(products) => Some(products.len() as u128),
            None => self.num_combinations(),
        }
    }

    fn answers(&self, limit: usize) -> Option<HashSet<String>> {
        let products: HashSet<u128> = self.products(limit)?;
        Some(products.into_iter().map(|p| format!("${p}$")).collect())
    }
}
