use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::tiling::Tiling;

pub const DEFAULT_WIDTH: usize = 24;
pub const DEFAULT_HEIGHT: usize = 24;
pub const DEFAULT_INTERVAL_MS: u64 = 500;
pub const DEFAULT_CELL_SIZE: usize = 3;
pub const DEFAULT_CELL_GAP: usize = 1;

/// Upper bound for `--cell-size` and `--cell-gap`, in braille dots
pub const MAX_CELL_DOTS: usize = 64;

/// Conway's Game of Life on a torus, tiled across the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version)]
pub struct Config {
    /// Number of columns in the world.
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_WIDTH,
        value_parser = parse_dimension
    )]
    pub width: usize,

    /// Number of rows in the world.
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_HEIGHT,
        value_parser = parse_dimension
    )]
    pub height: usize,

    /// Milliseconds between generations.
    #[arg(
        long = "interval-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub interval_ms: u64,

    /// Side of a cell, in braille dots.
    #[arg(
        long = "cell-size",
        value_name = "DOTS",
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = parse_cell_size
    )]
    pub cell_size: usize,

    /// Border around each cell, in braille dots.
    #[arg(
        long = "cell-gap",
        value_name = "DOTS",
        default_value_t = DEFAULT_CELL_GAP,
        value_parser = parse_cell_gap
    )]
    pub cell_gap: usize,

    /// Seed for the initial pattern. Random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file. Logs are discarded otherwise, since the terminal is in use.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval_ms: DEFAULT_INTERVAL_MS,
            cell_size: DEFAULT_CELL_SIZE,
            cell_gap: DEFAULT_CELL_GAP,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn tiling(&self) -> Tiling {
        Tiling::new(self.cell_size, self.cell_gap)
    }

    /// The generator used for seeding. Reproducible when `--seed` is given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse a strictly positive size.
fn parse_dimension(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("`{s}` is not a size: {e}"))?;

    if n == 0 {
        return Err("must be at least 1".to_string());
    }

    Ok(n)
}

fn parse_cell_size(s: &str) -> Result<usize, String> {
    parse_dots(s, 1)
}

fn parse_cell_gap(s: &str) -> Result<usize, String> {
    parse_dots(s, 0)
}

/// Parse a dot count in `min..=MAX_CELL_DOTS`.
fn parse_dots(s: &str, min: usize) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("`{s}` is not a dot count: {e}"))?;

    if !(min..=MAX_CELL_DOTS).contains(&n) {
        return Err(format!("must be between {min} and {MAX_CELL_DOTS}"));
    }

    Ok(n)
}
