pub use utils::Cell;
mod utils;

pub use world::{CellSet, ChunkedWorld, World};
pub mod world;

pub use engine::advance;
pub mod engine;

pub use error::{ConfigError, SimError, ViewError};
mod error;

pub use pattern::Preset;
pub mod pattern;

pub use config::{Args, Config};
pub mod config;

pub use sim::{Sim, SimCmd, SimHandle, Snapshot};
mod sim;

pub use view::View;
pub mod view;
