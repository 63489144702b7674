/*
worksheet.rs

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

//! Generate a complete worksheet from its configuration.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{OutputFormat, WorksheetConfig};
use crate::draw;
use crate::error::{PuzzleError, Result};
use crate::generator::{allocator, edges};
use crate::problems::unique::UniqueProblems;
use crate::problems::weighted::WeightedProblems;
use crate::problems::{self, ProblemRegistry, ProblemSource, Styled};
use crate::shapes::{self, ShapeRegistry};
use crate::tile::Tiles;

/// Tiles labeled with questions and answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Name of the shape.
    pub shape: String,

    /// Labeled tiles.
    pub tiles: Tiles,

    /// Number of question and answer pairs on the tiles.
    pub num_problems: usize,

    /// Seed of the random generator. Generating a worksheet with the same configuration and this
    /// seed produces the same worksheet.
    pub seed: u64,
}

impl Worksheet {
    /// Render the worksheet in the given format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Tikz => Ok(draw::to_tikz(&self.tiles)),
            OutputFormat::Json => draw::to_json(self),
        }
    }
}

/// Generate a worksheet with the default shapes and problem families.
pub fn generate(config: &WorksheetConfig) -> Result<Worksheet> {
    generate_with(config, &shapes::registry(), &problems::registry())
}

/// Generate a worksheet, looking up shapes and problem families in the given registries.
///
/// The configuration is fully validated before the random generator is used.
///
/// # Errors
///
/// The function returns an error for unknown shape or problem names, invalid arguments or
/// proportions, and when the problem families cannot provide enough distinct problems for the
/// shape.
pub fn generate_with(
    config: &WorksheetConfig,
    shape_registry: &ShapeRegistry,
    problem_registry: &ProblemRegistry,
) -> Result<Worksheet> {
    //
    // Build the tiles
    //
    let shape = shape_registry
        .get(&config.shape.name)
        .ok_or_else(|| PuzzleError::UnknownShape {
            name: config.shape.name.clone(),
            available: shape_registry.available(),
        })?;
    let mut tiles: Tiles = (shape.factory)(&config.shape.args)?;

    //
    // Build the problem sources
    //
    if config.problems.is_empty() {
        return Err(PuzzleError::NoProblemSources);
    }
    let mut sources: Vec<(Box<dyn ProblemSource>, f64)> = Vec::with_capacity(config.problems.len());
    for selection in &config.problems {
        let family = problem_registry
            .get(&selection.name)
            .ok_or_else(|| PuzzleError::UnknownProblem {
                name: selection.name.clone(),
                available: problem_registry.available(),
            })?;
        let source: Box<dyn ProblemSource> = (family.factory)(&selection.args)?;
        let source: Box<dyn ProblemSource> = match &selection.prefix {
            Some(prefix) => Box::new(Styled::new(source, prefix)),
            None => source,
        };
        debug!(
            "Problem {} {:?}, prefix {:?}, proportion {}",
            selection.name, selection.args, selection.prefix, selection.proportion
        );
        sources.push((source, selection.proportion));
    }
    let weighted: WeightedProblems = WeightedProblems::new(sources)?;

    //
    // Verify that there are enough problems for the shape
    //
    let required: usize = edges::num_touching_edges(&tiles);
    if let Some(available) = weighted.capacity()
        && available < required as u128
    {
        return Err(PuzzleError::Starvation {
            required,
            available,
        });
    }

    //
    // Place the problems on the tiles
    //
    let seed: u64 = match config.seed {
        Some(s) => s,
        None => rand::rng().random(),
    };
    info!("Generating {} with seed {seed}", config.shape.name);
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let mut unique: UniqueProblems<WeightedProblems> = UniqueProblems::new(weighted);
    let num_problems: usize = allocator::add_questions(&mut tiles, &mut unique, &mut rng)?;
    info!("Placed {num_problems} problems on {} tiles", tiles.len());

    Ok(Worksheet {
        shape: config.shape.name.clone(),
        tiles,
        num_problems,
        seed,
    })
}
