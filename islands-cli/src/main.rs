use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use islands::{ComponentLabeler, Grid, GridFormat};

/// Island counting CLI: count 4-connected land components in grid files
#[derive(Parser)]
#[command(name = "islands", version)]
struct Args {
    /// Input grid files (text, JSON or TOML); `-` reads stdin
    #[arg(required = true)]
    grids: Vec<String>,

    /// Also report the size of the component containing ROW,COL
    #[arg(long, value_parser = parse_seed)]
    seed: Option<(usize, usize)>,

    /// Include the size of every component
    #[arg(long)]
    sizes: bool,

    /// Input format (text, json, toml); guessed from the extension if omitted
    #[arg(short, long)]
    format: Option<GridFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress non-JSON output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct OutputResult {
    file: String,
    rows: usize,
    cols: usize,
    islands: usize,
    land_cells: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    affected_land: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component_sizes: Option<Vec<usize>>,
}

fn parse_seed(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;
    Ok((row, col))
}

/// Reject argument lists that name stdin more than once.
fn check_stdin_once(paths: &[String]) -> Result<()> {
    if paths.iter().filter(|p| p.as_str() == "-").count() > 1 {
        bail!("stdin (`-`) can only be read once");
    }
    Ok(())
}

fn read_grid<R: Read>(mut reader: R, path: &str, format: GridFormat) -> Result<Grid> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("failed to read grid: {path}"))?;
    format
        .parse(&text)
        .with_context(|| format!("failed to parse {} grid: {path}", format.name()))
}

fn load_grid(path: &str, format: Option<GridFormat>) -> Result<(Grid, GridFormat)> {
    if path == "-" {
        let format = format.unwrap_or(GridFormat::Text);
        let grid = read_grid(std::io::stdin().lock(), "<stdin>", format)?;
        return Ok((grid, format));
    }
    let format = format.unwrap_or_else(|| GridFormat::from_path(Path::new(path)));
    let file = File::open(path).with_context(|| format!("failed to open grid: {path}"))?;
    let grid = read_grid(file, path, format)?;
    Ok((grid, format))
}

fn analyze(
    file: &str,
    grid: &Grid,
    seed: Option<(usize, usize)>,
    sizes: bool,
) -> Result<OutputResult> {
    let labeler = ComponentLabeler::build(grid);

    let affected_land = match seed {
        Some((row, col)) => Some(
            labeler
                .affected_land_count(row, col)
                .with_context(|| format!("bad seed for {file}"))?,
        ),
        None => None,
    };

    Ok(OutputResult {
        file: file.to_string(),
        rows: grid.rows(),
        cols: grid.cols(),
        islands: labeler.count_islands(),
        land_cells: grid.land_count(),
        seed: seed.map(|(r, c)| [r, c]),
        affected_land,
        component_sizes: sizes.then(|| labeler.component_sizes()),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    check_stdin_once(&args.grids)?;

    for path in &args.grids {
        let (grid, format) = load_grid(path, args.format)?;

        if !args.quiet {
            eprintln!(
                "labeling {} ({}x{}, {})",
                path,
                grid.rows(),
                grid.cols(),
                format.name()
            );
        }

        let result = analyze(path, &grid, args.seed, args.sizes)?;

        if !args.quiet {
            eprintln!("  found {} islands", result.islands);
        }

        let json = if args.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{json}");
    }

    Ok(())
}
