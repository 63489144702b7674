/*
registry.rs

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

//! Name to factory mappings.
//!
//! Shapes and problem families are looked up by name from the command line. Each one is
//! described by an [`Entry`] that carries the factory function along with a description and a
//! usage string for the help output.
//!
//! New shapes or problem families are added with [`Registry::register`], without changing the
//! allocator or the multiplexer.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Registered shape or problem family.
#[derive(Debug, Clone)]
pub struct Entry<F> {
    /// Name used on the command line.
    pub name: &'static str,

    /// Human-readable description.
    pub description: &'static str,

    /// Positional arguments, such as `WIDTH`.
    pub usage: &'static str,

    /// Function that builds the object from its positional arguments.
    pub factory: F,
}

/// Registry of factories indexed by name.
#[derive(Debug, Clone)]
pub struct Registry<F> {
    entries: BTreeMap<&'static str, Entry<F>>,
}

impl<F> Default for Registry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Registry<F> {
    /// Create an empty [`Registry`] object.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add an entry. An existing entry with the same name is replaced.
    pub fn register(&mut self, entry: Entry<F>) {
        self.entries.insert(entry.name, entry);
    }

    /// Return the entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Entry<F>> {
        self.entries.get(name)
    }

    /// Sorted list of the registered names.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Comma-separated list of the registered names, for error messages.
    pub fn available(&self) -> String {
        self.names().join(", ")
    }

    /// Iterate over the entries, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<F>> {
        self.entries.values()
    }

    /// Describe each entry, for the help output.
    pub fn help(&self) -> String {
        let mut s: String = String::new();
        for entry in self.iter() {
            s.push_str(&format!("  {} {}\n", entry.name, entry.usage));
            for line in entry.description.lines() {
                s.push_str(&format!("      {line}\n"));
            }
        }
        s
    }
}

/// Parse a positional argument.
///
/// The returned error message names the argument and the rejected value.
pub fn parse_arg<T>(value: &str, argument: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| format!("{argument}: '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(value: u32) -> u32 {
        value * 2
    }

    fn add_one(value: u32) -> u32 {
        value + 1
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry: Registry<fn(u32) -> u32> = Registry::new();
        registry.register(Entry {
            name: "double",
            description: "Multiply by two.",
            usage: "VALUE",
            factory: double,
        });
        registry.register(Entry {
            name: "add_one",
            description: "Add one.\nSecond line.",
            usage: "VALUE",
            factory: add_one,
        });

        assert_eq!(registry.names(), vec!["add_one", "double"]);
        assert_eq!(registry.available(), "add_one, double");
        assert_eq!((registry.get("double").unwrap().factory)(21), 42);
        assert!(registry.get("triple").is_none());

        let help: String = registry.help();
        assert!(help.contains("  double VALUE\n      Multiply by two.\n"));
        assert!(help.contains("      Second line.\n"));
    }

    #[test]
    fn test_parse_arg() {
        assert_eq!(parse_arg::<i64>(" 5 ", "WIDTH"), Ok(5));
        let err: String = parse_arg::<i64>("five", "WIDTH").unwrap_err();
        assert!(err.starts_with("WIDTH: 'five'"));
    }
}
