/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line is made of three parts:
//!
//! * Global options, such as `--seed` or `--format`.
//! * The shape, introduced by `--shape` and followed by its positional arguments.
//! * One or more problem families, each introduced by `--problem` and followed by its positional
//!   arguments and its `--prefix` and `--proportion` options.
//!
//! Each part is parsed separately with Clap.
//!
//! # Examples
//!
//! List the available shapes and problem families:
//!
//! ```text
//! $ tripuzzle --list
//! ```
//!
//! Generate a pyramid of width 7 with two-digit multiplications in red, and twice as many
//! fraction conversions in blue:
//!
//! ```text
//! $ tripuzzle --seed 42 --output puzzle.tex \
//!     --shape triangle 7 \
//!     --problem multidigit_multiplication 2 2 --prefix red \
//!     --problem fraction_conversion 0 2 2 6 mixed improper --prefix blue --proportion 2
//! ```

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use log::debug;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{
    APPLICATION_NAME, COPYRIGHT_NOTICE, DEFAULT_PROPORTION, OutputFormat, ProblemSelection,
    ShapeSelection, WorksheetConfig,
};
use crate::error::{PuzzleError, Result};
use crate::problems;
use crate::shapes;
use crate::worksheet::{self, Worksheet};

const USAGE: &str = "tripuzzle [OPTIONS] --shape SHAPE [SHAPE_ARGUMENT...] \\
                 --problem PROBLEM [PROBLEM_ARGUMENT...] \\
                           [--prefix PREFIX] [--proportion PROPORTION] ...";

/// Generate triangle puzzle worksheets.
#[derive(Parser, Debug)]
#[command(name = APPLICATION_NAME, about, long_about = None, version, long_version = COPYRIGHT_NOTICE, override_usage = USAGE)]
struct Args {
    /// Seed of the random generator, to reproduce a worksheet
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Tikz)]
    format: OutputFormat,

    /// Write the worksheet to this file instead of the standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the shapes and problems
    #[arg(short, long, default_value_t = false)]
    list: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Shape part of the command line.
#[derive(Parser, Debug)]
#[command(name = APPLICATION_NAME, override_usage = USAGE, no_binary_name = true, allow_negative_numbers = true)]
struct ShapeArgs {
    /// The shape of the tessellation
    #[arg(long)]
    shape: String,

    /// Shape arguments
    args: Vec<String>,
}

/// Problem part of the command line.
#[derive(Parser, Debug)]
#[command(name = APPLICATION_NAME, override_usage = USAGE, no_binary_name = true, allow_negative_numbers = true)]
struct ProblemArgs {
    /// A type of problem to include
    #[arg(long)]
    problem: String,

    /// A prefix, such as a color, to insert before questions and answers
    #[arg(long)]
    prefix: Option<String>,

    /// The proportion of question/answer pairs this problem should account for
    #[arg(long, default_value_t = DEFAULT_PROPORTION)]
    proportion: f64,

    /// Problem arguments
    args: Vec<String>,
}

/// Command line split into its global, shape, and problem parts.
#[derive(Debug, Default, PartialEq)]
struct Segments {
    global: Vec<String>,
    shape: Option<Vec<String>>,
    problems: Vec<Vec<String>>,
}

/// Which part of the command line is being read.
#[derive(Debug, Copy, Clone, PartialEq)]
enum State {
    Global,
    Shape,
    Problem,
}

/// Split the command line on the `--shape` and `--problem` options.
fn split_segments(args: Vec<String>) -> Result<Segments> {
    let mut segments: Segments = Segments::default();
    let mut state: State = State::Global;

    for arg in args {
        if arg.starts_with("--shape") {
            if segments.shape.is_some() {
                return Err(PuzzleError::Usage(String::from(
                    "the --shape option can only be given once",
                )));
            }
            segments.shape = Some(Vec::new());
            state = State::Shape;
        } else if arg.starts_with("--problem") {
            segments.problems.push(Vec::new());
            state = State::Problem;
        }

        match state {
            State::Global => segments.global.push(arg),
            State::Shape => {
                if let Some(s) = segments.shape.as_mut() {
                    s.push(arg);
                }
            }
            State::Problem => {
                if let Some(p) = segments.problems.last_mut() {
                    p.push(arg);
                }
            }
        }
    }
    Ok(segments)
}

/// Describe the available shapes and problems.
fn catalog() -> String {
    format!(
        "Shapes:\n{}\nProblems:\n{}",
        shapes::registry().help(),
        problems::registry().help()
    )
}

/// Print an error followed by the usage on the standard error.
fn print_error(err: &PuzzleError) {
    eprintln!("Error: {err}\n\nUsage: {USAGE}\n\n{}", catalog());
}

/// Print a Clap error, or the help or version message, and return the exit status.
fn print_clap_error(err: &clap::Error) -> u8 {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Build the worksheet configuration from the shape and problem parts of the command line.
fn build_config(args: &Args, segments: &Segments) -> Result<WorksheetConfig> {
    let Some(shape_segment) = &segments.shape else {
        return Err(PuzzleError::Usage(String::from(
            "the --shape option is required",
        )));
    };
    let shape: ShapeArgs = ShapeArgs::try_parse_from(shape_segment)?;

    let mut problem_list: Vec<ProblemSelection> = Vec::with_capacity(segments.problems.len());
    for segment in &segments.problems {
        let problem: ProblemArgs = ProblemArgs::try_parse_from(segment)?;
        problem_list.push(ProblemSelection {
            name: problem.problem,
            args: problem.args,
            prefix: problem.prefix,
            proportion: problem.proportion,
        });
    }

    Ok(WorksheetConfig {
        shape: ShapeSelection {
            name: shape.shape,
            args: shape.args,
        },
        problems: problem_list,
        seed: args.seed,
        format: args.format,
    })
}

/// Generate the worksheet and write it to the output.
fn execute(args: &Args, config: &WorksheetConfig) -> Result<()> {
    let worksheet: Worksheet = worksheet::generate(config)?;
    let doc: String = worksheet.render(config.format)?;

    match &args.output {
        Some(path) => {
            debug!("Writing {} to {path:?}", config.format);
            fs::write(path, doc)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(doc.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Parse and process the command-line options of the process.
///
/// Return the exit status.
pub fn parse() -> u8 {
    run(env::args().skip(1))
}

/// Parse and process the given command-line options (without the program name).
///
/// Return the exit status.
pub fn run<I, T>(arguments: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let segments: Segments = match split_segments(arguments.into_iter().map(Into::into).collect())
    {
        Ok(s) => s,
        Err(e) => {
            print_error(&e);
            return 1;
        }
    };

    //
    // Global options
    //
    let global = std::iter::once(String::from(APPLICATION_NAME))
        .chain(segments.global.iter().cloned());
    let matches = Args::command()
        .after_help(catalog())
        .try_get_matches_from(global);
    let args: Args = match matches.and_then(|m| Args::from_arg_matches(&m)) {
        Ok(a) => a,
        Err(e) => return print_clap_error(&e),
    };

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    let _ = env_logger::try_init();

    if args.list {
        print!("{}", catalog());
        return 0;
    }

    //
    // Shape and problems
    //
    let config: WorksheetConfig = match build_config(&args, &segments) {
        Ok(c) => c,
        Err(PuzzleError::Clap(e)) => return print_clap_error(&e),
        Err(e) => {
            print_error(&e);
            return 1;
        }
    };
    debug!("Configuration: {config:?}");

    match execute(&args, &config) {
        Ok(()) => 0,
        Err(e) => {
            print_error(&e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_split_segments() {
        let segments: Segments = split_segments(strings(&[
            "--seed",
            "3",
            "--shape",
            "triangle",
            "5",
            "--problem",
            "multidigit_multiplication",
            "2",
            "--prefix",
            "red",
            "--problem=fraction_conversion",
            "0",
        ]))
        .unwrap();
        assert_eq!(segments.global, strings(&["--seed", "3"]));
        assert_eq!(segments.shape, Some(strings(&["--shape", "triangle", "5"])));
        assert_eq!(
            segments.problems,
            vec![
                strings(&["--problem", "multidigit_multiplication", "2", "--prefix", "red"]),
                strings(&["--problem=fraction_conversion", "0"]),
            ]
        );
    }

    #[test]
    fn test_shape_given_twice() {
        let res = split_segments(strings(&["--shape", "triangle", "3", "--shape", "triangle"]));
        assert!(matches!(res, Err(PuzzleError::Usage(_))));
    }

    #[test]
    fn test_build_config() {
        let args: Args = Args::try_parse_from(["tripuzzle", "--seed", "9", "-f", "json"]).unwrap();
        let segments: Segments = split_segments(strings(&[
            "--shape",
            "triangle",
            "7",
            "--problem",
            "multidigit_multiplication",
            "--prefix",
            "red",
            "1",
            "3",
            "--proportion",
            "2.5",
            "--problem",
            "fraction_conversion",
            "0",
            "2",
            "2",
            "6",
            "mixed",
            "pie",
        ]))
        .unwrap();
        let config: WorksheetConfig = build_config(&args, &segments).unwrap();

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.shape.name, "triangle");
        assert_eq!(config.shape.args, strings(&["7"]));
        assert_eq!(config.problems.len(), 2);
        assert_eq!(config.problems[0].args, strings(&["1", "3"]));
        assert_eq!(config.problems[0].prefix.as_deref(), Some("red"));
        assert_eq!(config.problems[0].proportion, 2.5);
        assert_eq!(config.problems[1].prefix, None);
        assert_eq!(config.problems[1].proportion, DEFAULT_PROPORTION);
    }

    #[test]
    fn test_missing_shape() {
        let args: Args = Args::try_parse_from(["tripuzzle"]).unwrap();
        let segments: Segments =
            split_segments(strings(&["--problem", "multidigit_multiplication", "2"])).unwrap();
        assert!(matches!(
            build_config(&args, &segments),
            Err(PuzzleError::Usage(_))
        ));
    }

    #[test]
    fn test_problem_option_errors_name_the_argument() {
        let args: Args = Args::try_parse_from(["tripuzzle"]).unwrap();
        let segments: Segments = split_segments(strings(&[
            "--shape",
            "triangle",
            "3",
            "--problem",
            "multidigit_multiplication",
            "2",
            "--bogus",
        ]))
        .unwrap();
        match build_config(&args, &segments) {
            Err(PuzzleError::Clap(e)) => {
                assert_eq!(e.kind(), ErrorKind::UnknownArgument);
                assert!(e.to_string().contains("--bogus"), "{e}");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_help_in_shape_and_problem_parts() {
        assert_eq!(run(["--shape", "triangle", "--help"]), 0);
        assert_eq!(
            run([
                "--shape",
                "triangle",
                "3",
                "--problem",
                "multidigit_multiplication",
                "--help"
            ]),
            0
        );
        assert_eq!(
            run([
                "--shape",
                "triangle",
                "3",
                "--problem",
                "multidigit_multiplication",
                "2",
                "--bogus"
            ]),
            1
        );
    }

    #[test]
    fn test_run_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path: PathBuf = temp_dir.path().join("puzzle.tex");
        let path_str: String = path.to_string_lossy().to_string();

        let status: u8 = run([
            "--seed",
            "42",
            "--output",
            path_str.as_str(),
            "--shape",
            "triangle",
            "5",
            "--problem",
            "multidigit_multiplication",
            "2",
            "2",
            "--prefix",
            "red",
        ]);
        assert_eq!(status, 0);

        let doc: String = fs::read_to_string(&path).unwrap();
        assert!(doc.starts_with(r"\documentclass"));
        assert_eq!(doc.matches(r"\tri{").count(), 9);
        assert_eq!(doc.matches("[red]{").count(), 18);
    }

    #[test]
    fn test_run_json_is_reproducible() {
        let temp_dir = TempDir::new().unwrap();
        let mut docs: Vec<String> = Vec::new();
        for name in ["a.json", "b.json"] {
            let path: PathBuf = temp_dir.path().join(name);
            let path_str: String = path.to_string_lossy().to_string();
            let status: u8 = run([
                "--seed",
                "7",
                "--format",
                "json",
                "--output",
                path_str.as_str(),
                "--shape",
                "triangle",
                "3",
                "--problem",
                "fraction_conversion",
                "0",
                "3",
                "2",
                "8",
                "mixed",
                "impropper",
            ]);
            assert_eq!(status, 0);
            docs.push(fs::read_to_string(&path).unwrap());
        }
        assert_eq!(docs[0], docs[1]);
        let value: serde_json::Value = serde_json::from_str(&docs[0]).unwrap();
        assert_eq!(value["num_problems"], 3);
    }

    #[test]
    fn test_run_errors() {
        assert_eq!(run(["--shape", "hexagon", "3"]), 1);
        assert_eq!(
            run(["--shape", "triangle", "3", "--problem", "division", "1"]),
            1
        );
        assert_eq!(
            run([
                "--shape",
                "triangle",
                "4",
                "--problem",
                "multidigit_multiplication",
                "2"
            ]),
            1
        );
        assert_eq!(run(["--unknown-option"]), 1);
        assert_eq!(run(["--list"]), 0);
    }
}
