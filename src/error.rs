/*
error.rs

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

//! Errors reported while setting up or generating a worksheet.
//!
//! Configuration problems (unknown names, bad arguments, weights, starvation) are reported as
//! [`PuzzleError`] values before any random draw happens.
//! Labeling contract violations on a [`crate::tile::Tile`] are not errors: they panic.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Invalid width {0}: the width must be an odd positive integer")]
    InvalidWidth(i64),

    #[error("Invalid arguments for shape {shape}: {message}")]
    InvalidShapeArguments { shape: String, message: String },

    #[error("Unknown shape '{name}' (available shapes: {available})")]
    UnknownShape { name: String, available: String },

    #[error("Unknown problem '{name}' (available problems: {available})")]
    UnknownProblem { name: String, available: String },

    #[error("Invalid arguments for problem {problem}: {message}")]
    InvalidProblemArguments { problem: String, message: String },

    #[error("Invalid proportion {0}: proportions must be positive numbers")]
    InvalidWeight(f64),

    #[error("No problem specified: at least one --problem is required")]
    NoProblemSources,

    #[error("Not enough distinct problems: {required} required, at most {available} available")]
    Starvation { required: usize, available: u128 },

    #[error(
        "Could not draw enough distinct problems: {required} required, only {produced} found before giving up"
    )]
    UniqueExhausted { required: usize, produced: usize },

    #[error("Command line error: {0}")]
    Usage(String),

    #[error("{0}")]
    Clap(#[from] clap::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    /// Shortcut for building an [`PuzzleError::InvalidProblemArguments`] error.
    pub fn problem_args(problem: &str, message: impl Into<String>) -> Self {
        PuzzleError::InvalidProblemArguments {
            problem: problem.to_string(),
            message: message.into(),
        }
    }

    /// Shortcut for building an [`PuzzleError::InvalidShapeArguments`] error.
    pub fn shape_args(shape: &str, message: impl Into<String>) -> Self {
        PuzzleError::InvalidShapeArguments {
            shape: shape.to_string(),
            message: message.into(),
        }
    }
}
