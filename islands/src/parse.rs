use std::path::Path;
use std::str::FromStr;

use crate::error::IslandsError;
use crate::grid::Grid;

/// On-disk grid encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    /// One row per line; cells split on whitespace or commas, or one digit per cell.
    Text,
    /// `[[1, 0], [0, 1]]` or `{"cells": [[1, 0], [0, 1]]}`.
    Json,
    /// `cells = [[1, 0], [0, 1]]`.
    Toml,
}

impl GridFormat {
    /// Guess the format from a file extension, defaulting to text.
    pub fn from_path(path: &Path) -> GridFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GridFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => GridFormat::Toml,
            _ => GridFormat::Text,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GridFormat::Text => "text",
            GridFormat::Json => "json",
            GridFormat::Toml => "toml",
        }
    }

    /// Parse `input` in this format.
    pub fn parse(self, input: &str) -> Result<Grid, IslandsError> {
        match self {
            GridFormat::Text => parse_text(input),
            GridFormat::Json => parse_json(input),
            GridFormat::Toml => parse_toml(input),
        }
    }
}

impl FromStr for GridFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(GridFormat::Text),
            "json" => Ok(GridFormat::Json),
            "toml" => Ok(GridFormat::Toml),
            other => Err(format!("unknown grid format: {other}")),
        }
    }
}

/// Parse the plain-text grid format.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based. Rows are read one digit per cell only when every row
/// is a bare run of at least two digits and all rows have the same length;
/// anything else is read as separated integer tokens, so single-column grids
/// keep negative and multi-digit values intact.
pub fn parse_text(input: &str) -> Result<Grid, IslandsError> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let compact = is_compact(&lines);
    let rows = lines
        .iter()
        .map(|&(lineno, line)| {
            if compact {
                Ok(compact_row(line))
            } else {
                token_row(line, lineno)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_rows(rows)
}

fn is_compact(lines: &[(usize, &str)]) -> bool {
    let Some(&(_, first)) = lines.first() else {
        return false;
    };
    first.len() > 1
        && lines.iter().all(|&(_, line)| {
            line.len() == first.len() && line.bytes().all(|b| b.is_ascii_digit())
        })
}

// "10110" -> [1, 0, 1, 1, 0]; caller has checked every byte is a digit
fn compact_row(line: &str) -> Vec<i64> {
    line.bytes().map(|b| i64::from(b - b'0')).collect()
}

fn token_row(line: &str, lineno: usize) -> Result<Vec<i64>, IslandsError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i64>().map_err(|e| IslandsError::Parse {
                line: lineno,
                message: format!("invalid cell '{tok}': {e}"),
            })
        })
        .collect()
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum GridDoc {
    Bare(Vec<Vec<i64>>),
    Wrapped { cells: Vec<Vec<i64>> },
}

#[cfg(feature = "serde")]
impl GridDoc {
    fn into_grid(self) -> Result<Grid, IslandsError> {
        match self {
            GridDoc::Bare(cells) | GridDoc::Wrapped { cells } => Grid::from_rows(cells),
        }
    }
}

#[cfg(feature = "serde")]
fn parse_json(input: &str) -> Result<Grid, IslandsError> {
    let doc: GridDoc = serde_json::from_str(input).map_err(|e| IslandsError::Format {
        format: "json",
        message: e.to_string(),
    })?;
    doc.into_grid()
}

#[cfg(feature = "serde")]
fn parse_toml(input: &str) -> Result<Grid, IslandsError> {
    let doc: GridDoc = toml::from_str(input).map_err(|e| IslandsError::Format {
        format: "toml",
        message: e.to_string(),
    })?;
    doc.into_grid()
}

#[cfg(not(feature = "serde"))]
fn parse_json(_input: &str) -> Result<Grid, IslandsError> {
    Err(IslandsError::Format {
        format: "json",
        message: "built without the `serde` feature".to_string(),
    })
}

#[cfg(not(feature = "serde"))]
fn parse_toml(_input: &str) -> Result<Grid, IslandsError> {
    Err(IslandsError::Format {
        format: "toml",
        message: "built without the `serde` feature".to_string(),
    })
}
