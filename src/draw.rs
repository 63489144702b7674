/*
draw.rs

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

//! Render labeled tiles as a LaTeX/TikZ document or as JSON.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::error::Result;
use crate::tile::{Edge, Label, Orientation, Tile, Tiles};
use crate::worksheet::Worksheet;

/// Beginning of the LaTeX document, with the `\tri` command that draws a tile.
const TIKZ_HEADER: &str = r#"\documentclass[12pt]{standalone}

\usepackage{ifthen}
\usepackage[cm]{sfmath}

\usepackage{tikz}
\usetikzlibrary{shapes.geometric}
\usetikzlibrary{positioning}

% Produce a triangular tile with labels on each side
% #1 position
% #2 name
% #3 points up? (up/down)
% #4 Top/Bottom node string (e.g. "[red] {Question}")
% #5 Left node string (e.g. "[red] {Question}")
% #6 Right node string (e.g. "[red] {Question}")
\newcommand{\tri}[6]{
	\coordinate (#2 start) at ([x=(0:0.5),y=(90:0.8660254)]#1);

	\ifthenelse{\equal{#3}{up}}{
		\draw (#2 start) -- +(0:1) -- +(60:1) -- cycle;
		\coordinate (#2 center) at ([shift={(30:0.57735027)}]#2 start);
		\coordinate (#2 left) at ([shift={(60:0.5)}]#2 start);
		\coordinate (#2 right) at ([shift={(0:1)}]#2 start);
		\coordinate (#2 right) at ([shift={(90+30:0.5)}]#2 right);
		\coordinate (#2 bottom) at ([shift={(0:0.5)}]#2 start);

		\node [rotate=180,below=of #2 bottom] #4;
		\node [rotate= 60,below=of #2 left] #5;
		\node [rotate=-60,below=of #2 right] #6;
	}{
		\coordinate (#2 start) at ([shift={(0.5,0)}]#2 start);
		\draw (#2 start) -- +(60:1) -- +(90+30:1) -- cycle;
		\coordinate (#2 center) at ([shift={(90:0.57735027)}]#2 start);
		\coordinate (#2 left) at ([shift={(90+30:0.5)}]#2 start);
		\coordinate (#2 right) at ([shift={(60:0.5)}]#2 start);
		\coordinate (#2 top) at ([shift={(60:1)}]#2 start);
		\coordinate (#2 top) at ([shift={(180:0.5)}]#2 top);
		\node [rotate=  0,below=of #2 top] #4;
		\node [rotate=180+60,below=of #2 right] #6;
		\node [rotate=180-60,below=of #2 left] #5;
	}
}

\begin{document}
\begin{tikzpicture}[scale=4, node distance=0, minimum width=0, minimum height=0]
"#;

/// End of the LaTeX document.
const TIKZ_FOOTER: &str = r"\end{tikzpicture}
\end{document}
";

/// TikZ node content for an edge: `[style]{text}`, or `{}` for an unlabeled edge.
fn tikz_node(label: Option<&Label>) -> String {
    match label {
        None => String::from("{}"),
        Some(Label { text, style: None }) => format!("{{{text}}}"),
        Some(Label {
            text,
            style: Some(style),
        }) => format!("[{style}]{{{text}}}"),
    }
}

/// Convert the tiles into a standalone LaTeX/TikZ document.
pub fn to_tikz(tiles: &Tiles) -> String {
    let mut out: String = String::from(TIKZ_HEADER);

    for (&(x, y), tile) in tiles.iter() {
        let orientation: Orientation = Orientation::of(x);
        let _ = writeln!(
            out,
            r"\tri{{{},{}}}{{tile {x} {y}}}{{{orientation}}}{{{}}}{{{}}}{{{}}};",
            x + y,
            y,
            tikz_node(tile.get_edge(orientation.horizontal_edge())),
            tikz_node(tile.get_edge(Edge::Left)),
            tikz_node(tile.get_edge(Edge::Right)),
        );
    }

    out.push_str(TIKZ_FOOTER);
    out
}

/// JSON representation of a tile.
#[derive(Serialize)]
struct JsonTile<'a> {
    x: i32,
    y: i32,
    orientation: Orientation,
    edges: BTreeMap<Edge, &'a Label>,
}

impl<'a> JsonTile<'a> {
    fn new(pos: (i32, i32), tile: &'a Tile) -> Self {
        Self {
            x: pos.0,
            y: pos.1,
            orientation: Orientation::of(pos.0),
            edges: tile.edges().map(|(e, l)| (*e, l)).collect(),
        }
    }
}

/// JSON representation of a worksheet.
#[derive(Serialize)]
struct JsonWorksheet<'a> {
    shape: &'a str,
    seed: u64,
    num_problems: usize,
    tiles: Vec<JsonTile<'a>>,
}

/// Convert the worksheet into a JSON document.
pub fn to_json(worksheet: &Worksheet) -> Result<String> {
    let doc = JsonWorksheet {
        shape: &worksheet.shape,
        seed: worksheet.seed,
        num_problems: worksheet.num_problems,
        tiles: worksheet
            .tiles
            .iter()
            .map(|(pos, tile)| JsonTile::new(*pos, tile))
            .collect(),
    };
    let mut s: String = serde_json::to_string_pretty(&doc)?;
    s.push('\n');
    Ok(s)
}
