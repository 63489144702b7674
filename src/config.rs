/*
config.rs

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

//! Application constants and worksheet configuration.
//!
//! Tripuzzle has no configuration file: the [`WorksheetConfig`] object is built from the command
//! line by [`crate::cli_options`] and validated by [`crate::worksheet::generate`].

use clap::ValueEnum;
use strum_macros::Display;

pub const APPLICATION_NAME: &str = env!("CARGO_PKG_NAME");

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Number of consecutive duplicated problems after which drawing unique problems gives up.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Largest number of answers listed when estimating how many distinct problems the sources
/// provide. Above that, the estimate falls back to counting the possible draws.
pub const MAX_ENUMERATED_PROBLEMS: usize = 1_000_000;

/// Proportion of a problem family when `--proportion` is not given.
pub const DEFAULT_PROPORTION: f64 = 1.0;

/// Format of the generated worksheet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone LaTeX document with a TikZ picture.
    #[default]
    Tikz,

    /// JSON description of the labeled tiles.
    Json,
}

/// Shape requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSelection {
    /// Name of the shape in the shape registry.
    pub name: String,

    /// Positional arguments passed to the shape builder.
    pub args: Vec<String>,
}

/// Problem family requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSelection {
    /// Name of the problem family in the problem registry.
    pub name: String,

    /// Positional arguments passed to the problem source.
    pub args: Vec<String>,

    /// Display style for the questions and answers.
    pub prefix: Option<String>,

    /// Relative weight of the problem family.
    pub proportion: f64,
}

impl ProblemSelection {
    /// Create a [`ProblemSelection`] object with no prefix and the default proportion.
    pub fn new(name: &str, args: &[&str]) -> Self {
        Self {
            name: String::from(name),
            args: args.iter().map(|a| a.to_string()).collect(),
            prefix: None,
            proportion: DEFAULT_PROPORTION,
        }
    }
}

/// Everything needed to generate a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetConfig {
    pub shape: ShapeSelection,
    pub problems: Vec<ProblemSelection>,

    /// Seed of the random generator. A random seed is used when [`None`].
    pub seed: Option<u64>,

    pub format: OutputFormat,
}

impl WorksheetConfig {
    /// Create a [`WorksheetConfig`] object with no problem, no seed, and the default format.
    pub fn new(shape: &str, args: &[&str]) -> Self {
        Self {
            shape: ShapeSelection {
                name: String::from(shape),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            problems: Vec::new(),
            seed: None,
            format: OutputFormat::default(),
        }
    }
}
