//! Error types of the embedding layer. The simulation core itself is infallible.

use std::{ops::RangeInclusive, time::Duration};

use thiserror::Error;

/// Invalid command line configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Viewport dimension outside of the accepted range.
    #[error("{axis} must be within {}..={} cells, got {value}", .range.start(), .range.end())]
    ViewportOutOfRange {
        axis: &'static str,
        value: u16,
        range: RangeInclusive<u16>,
    },

    /// Tick interval outside of the accepted range.
    #[error("interval must be within {}..={} ms, got {}", .range.start(), .range.end(), .value.as_millis())]
    IntervalOutOfRange {
        value: Duration,
        range: RangeInclusive<u64>,
    },

    /// Soup density is not a probability.
    #[error("density must be within 0.0..=1.0, got {0}")]
    DensityOutOfRange(f64),

    /// No built-in pattern with that name.
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Failure to reach the simulation thread.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// The simulation thread has stopped and dropped its command queue.
    #[error("simulation thread disconnected")]
    Disconnected,

    /// The simulation thread panicked.
    #[error("simulation thread panicked")]
    Panicked,
}

/// Failure of the terminal front-end.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Terminal io error.
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),

    /// The simulation could not be reached.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// The view thread panicked.
    #[error("view thread panicked")]
    Panicked,
}
