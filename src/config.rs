use std::{ops::RangeInclusive, time::Duration};

use clap::Parser;

use crate::{cell, pattern, Cell, ConfigError, Preset};

pub const VIEWPORT_RANGE: RangeInclusive<u16> = 6..=256;
pub const INTERVAL_RANGE_MS: RangeInclusive<u64> = 10..=10_000;
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Draw cells with the cursor and watch them evolve on an unbounded plane.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about)]
pub struct Args {
    /// Width of the visible window in cells [default: terminal width]
    #[arg(long)]
    pub width: Option<u16>,

    /// Height of the visible window in cells [default: terminal height]
    #[arg(long)]
    pub height: Option<u16>,

    /// Delay between two generations, in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval: u64,

    /// Built-in pattern placed at the center of the window
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Fill the window at random, each cell alive with this probability
    #[arg(long)]
    pub soup: Option<f64>,

    /// Seed for --soup
    #[arg(long, requires = "soup")]
    pub seed: Option<u64>,

    /// Start animating right away
    #[arg(long)]
    pub run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Soup {
    pub density: f64,
    pub seed: Option<u64>,
}

/// Validated configuration of the embedding layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub viewport: ViewportSize,
    pub interval: Duration,
    pub preset: Option<Preset>,
    pub soup: Option<Soup>,
    pub running: bool,
}

impl Args {
    /// validates the arguments, missing dimensions fall back to `terminal` (columns, rows).
    pub fn into_config(self, terminal: (u16, u16)) -> Result<Config, ConfigError> {
        let (columns, rows) = terminal;
        let clamp = |n: u16| n.clamp(*VIEWPORT_RANGE.start(), *VIEWPORT_RANGE.end());
        let width = check_dimension("width", self.width.unwrap_or_else(|| clamp(columns)))?;
        // the last row holds the status line
        let height = check_dimension(
            "height",
            self.height.unwrap_or_else(|| clamp(rows.saturating_sub(1))),
        )?;

        if !INTERVAL_RANGE_MS.contains(&self.interval) {
            return Err(ConfigError::IntervalOutOfRange {
                value: Duration::from_millis(self.interval),
                range: INTERVAL_RANGE_MS,
            });
        }

        let soup = match self.soup {
            Some(density) if !(0.0..=1.0).contains(&density) => {
                return Err(ConfigError::DensityOutOfRange(density))
            }
            Some(density) => Some(Soup {
                density,
                seed: self.seed,
            }),
            None => None,
        };

        Ok(Config {
            viewport: ViewportSize { width, height },
            interval: Duration::from_millis(self.interval),
            preset: self.preset,
            soup,
            running: self.run,
        })
    }
}

fn check_dimension(axis: &'static str, value: u16) -> Result<u16, ConfigError> {
    if VIEWPORT_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ViewportOutOfRange {
            axis,
            value,
            range: VIEWPORT_RANGE,
        })
    }
}

impl Config {
    /// cells to seed the board with, the viewport's top-left corner being `origin`.
    pub fn initial_cells(&self, origin: Cell) -> Vec<Cell> {
        let ViewportSize { width, height } = self.viewport;
        let mut result = match self.soup {
            Some(Soup { density, seed }) => pattern::soup(origin, width, height, density, seed),
            None => vec![],
        };
        if let Some(preset) = self.preset {
            let center = origin + cell!(width as i64 / 2, height as i64 / 2);
            result.extend(preset.centered_on(center));
        }
        result
    }
}
