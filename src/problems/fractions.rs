/*
fractions.rs

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

//! Fraction interpretation problems.
//!
//! A fraction is drawn once and displayed in two formats: one for the question, one for the
//! answer.

use log::debug;
use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::fmt::Write;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use super::{Problem, ProblemSource};
use crate::error::{PuzzleError, Result};
use crate::generator::registry::parse_arg;

pub const NAME: &str = "fraction_conversion";

pub const USAGE: &str = "WHOLE_MIN WHOLE_MAX DENOMINATOR_MIN DENOMINATOR_MAX FORMAT_Q FORMAT_A";

pub const DESCRIPTION: &str = r"Fractions displayed in two formats. The whole part is drawn from
[WHOLE_MIN, WHOLE_MAX], the denominator from [DENOMINATOR_MIN, DENOMINATOR_MAX],
and the numerator from [1, denominator]. FORMAT_Q and FORMAT_A are the formats
of the question and the answer:
  mixed: a mixed-number fraction, e.g. 1 2/3
  improper: an improper fraction, e.g. 5/3
  pie: a series of pie charts";

/// Largest accepted whole part.
const MAX_WHOLE: u32 = 100_000;

/// Largest accepted denominator.
const MAX_DENOMINATOR: u32 = 1000;

/// Display format of a fraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum FractionFormat {
    /// Mixed number, such as `$1\frac{2}{3}$`.
    #[strum(serialize = "mixed")]
    Mixed,

    /// Improper fraction, such as `$\frac{5}{3}$`.
    #[strum(to_string = "improper", serialize = "impropper")]
    Improper,

    /// Pie charts: one filled pie per whole unit, and a pie with `numerator` filled wedges.
    #[strum(serialize = "pie")]
    Pie,
}

/// Fraction in the form `whole + numerator / denominator`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fraction {
    pub whole: u32,
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    /// Numerator of the equivalent improper fraction.
    pub fn improper_numerator(&self) -> u64 {
        self.numerator as u64 + self.denominator as u64 * self.whole as u64
    }

    /// Format the fraction.
    pub fn format(&self, format: FractionFormat) -> String {
        match format {
            FractionFormat::Mixed => {
                if self.whole == 0 {
                    format!(r"$\frac{{{}}}{{{}}}$", self.numerator, self.denominator)
                } else {
                    format!(
                        r"${}\frac{{{}}}{{{}}}$",
                        self.whole, self.numerator, self.denominator
                    )
                }
            }
            FractionFormat::Improper => format!(
                r"$\frac{{{}}}{{{}}}$",
                self.improper_numerator(),
                self.denominator
            ),
            FractionFormat::Pie => self.pie(),
        }
    }

    /// Draw the fraction as TikZ pie charts.
    fn pie(&self) -> String {
        let mut out: String = String::from(r"\begin{tikzpicture}[scale=0.3,thick]");

        // Command that draws a wedge
        //  #1: Offset
        //  #2: Number of slices
        //  #3: Slice number
        //  #4: Style
        out.push_str(r"  \newcommand{\wdge}[4]{");
        out.push_str(r"    \begin{scope}[shift={#1}]");
        out.push_str(r"      \pgfmathsetmacro{\wangle}{360.0 / #2}");
        out.push_str(r"      \pgfmathsetmacro{\wstart}{\wangle * #3}");
        out.push_str(r"      \pgfmathsetmacro{\wend}{\wangle * (#3+1)}");
        out.push_str(r"      \draw [fill opacity=0.5, #4]");
        out.push_str(r"            (0,0)");
        out.push_str(r"         -- (\wstart:0.5)");
        out.push_str(r"        arc (\wstart:\wend:0.5)");
        out.push_str(r"         -- cycle;");
        out.push_str(r"    \end{scope}");
        out.push_str(r"  }");

        for whole in 0..self.whole {
            for wedge in 0..self.denominator {
                let _ = write!(
                    out,
                    r"  \wdge{{({whole}*1.2,0)}}{{{}}}{{{wedge}}}{{fill}}",
                    self.denominator
                );
            }
        }
        for wedge in 0..self.denominator {
            let style: &str = if wedge < self.numerator { "fill" } else { "" };
            let _ = write!(
                out,
                r"  \wdge{{({}*1.2,0)}}{{{}}}{{{wedge}}}{{{style}}}",
                self.whole, self.denominator
            );
        }
        out.push_str(r"\end{tikzpicture}");
        out
    }
}

/// Source of fraction conversion problems.
#[derive(Debug, Clone)]
pub struct FractionConversion {
    whole_min: u32,
    whole_max: u32,
    denominator_min: u32,
    denominator_max: u32,
    format_q: FractionFormat,
    format_a: FractionFormat,
}

impl FractionConversion {
    /// Create a [`FractionConversion`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if a range is empty, if the smallest denominator is 0, or if
    /// a bound is too large.
    pub fn new(
        whole: (u32, u32),
        denominator: (u32, u32),
        format_q: FractionFormat,
        format_a: FractionFormat,
    ) -> Result<Self> {
        let (whole_min, whole_max) = whole;
        let (denominator_min, denominator_max) = denominator;

        if whole_min > whole_max || whole_max > MAX_WHOLE {
            return Err(PuzzleError::problem_args(
                NAME,
                format!(
                    "the whole part range must be within [0, {MAX_WHOLE}], got [{whole_min}, {whole_max}]"
                ),
            ));
        }
        if denominator_min == 0
            || denominator_min > denominator_max
            || denominator_max > MAX_DENOMINATOR
        {
            return Err(PuzzleError::problem_args(
                NAME,
                format!(
                    "the denominator range must be within [1, {MAX_DENOMINATOR}], got [{denominator_min}, {denominator_max}]"
                ),
            ));
        }
        debug!(
            "Fractions: whole [{whole_min}, {whole_max}], denominator [{denominator_min}, {denominator_max}], {format_q} -> {format_a}"
        );

        Ok(Self {
            whole_min,
            whole_max,
            denominator_min,
            denominator_max,
            format_q,
            format_a,
        })
    }

    /// Draw a fraction.
    pub fn draw(&self, rng: &mut dyn RngCore) -> Fraction {
        let denominator: u32 = rng.random_range(self.denominator_min..=self.denominator_max);
        Fraction {
            whole: rng.random_range(self.whole_min..=self.whole_max),
            numerator: rng.random_range(1..=denominator),
            denominator,
        }
    }
}

/// Build the source from its command-line arguments.
pub fn from_args(args: &[String]) -> Result<Box<dyn ProblemSource>> {
    let [whole_min, whole_max, denominator_min, denominator_max, format_q, format_a] = args else {
        return Err(PuzzleError::problem_args(
            NAME,
            format!("expected {USAGE}, got {} arguments", args.len()),
        ));
    };

    let bound = |value: &String, argument: &str| -> Result<u32> {
        parse_arg::<u32>(value, argument).map_err(|e| PuzzleError::problem_args(NAME, e))
    };
    let parse_format = |value: &String, argument: &str| -> Result<FractionFormat> {
        FractionFormat::from_str(value.trim()).map_err(|_| {
            PuzzleError::problem_args(
                NAME,
                format!("{argument}: unknown format '{value}' (expected mixed, improper, or pie)"),
            )
        })
    };

    Ok(Box::new(FractionConversion::new(
        (bound(whole_min, "WHOLE_MIN")?, bound(whole_max, "WHOLE_MAX")?),
        (
            bound(denominator_min, "DENOMINATOR_MIN")?,
            bound(denominator_max, "DENOMINATOR_MAX")?,
        ),
        parse_format(format_q, "FORMAT_Q")?,
        parse_format(format_a, "FORMAT_A")?,
    )?))
}

impl ProblemSource for FractionConversion {
    fn next_problem(&mut self, rng: &mut dyn RngCore) -> Problem {
        let fraction: Fraction = self.draw(rng);
        Problem::new(fraction.format(self.format_q), fraction.format(self.format_a))
    }

    fn capacity(&self) -> Option<u128> {
        // For each denominator d, there are d numerators
        let wholes: u128 = (self.whole_max - self.whole_min) as u128 + 1;
        let numerators: u128 = (self.denominator_min..=self.denominator_max)
            .map(|d| d as u128)
            .sum();
        Some(wholes * numerators)
    }

    fn answers(&self, limit: usize) -> Option<HashSet<String>> {
        if self.capacity()? > limit as u128 {
            return None;
        }
        let mut answers: HashSet<String> = HashSet::new();
        for whole in self.whole_min..=self.whole_max {
            for denominator in self.denominator_min..=self.denominator_max {
                for numerator in 1..=denominator {
                    let fraction = Fraction {
                        whole,
                        numerator,
                        denominator,
                    };
                    answers.insert(fraction.format(self.format_a));
                }
            }
        }
        Some(answers)
    }
}
