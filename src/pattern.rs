use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{cell, Cell, ConfigError};

/// Built-in seed patterns, given relative to their top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    Lwss,
    RPentomino,
    GliderGun,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Block,
        Preset::Blinker,
        Preset::Toad,
        Preset::Beacon,
        Preset::Glider,
        Preset::Lwss,
        Preset::RPentomino,
        Preset::GliderGun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Block => "block",
            Preset::Blinker => "blinker",
            Preset::Toad => "toad",
            Preset::Beacon => "beacon",
            Preset::Glider => "glider",
            Preset::Lwss => "lwss",
            Preset::RPentomino => "r-pentomino",
            Preset::GliderGun => "glider-gun",
        }
    }

    fn coordinates(self) -> &'static [(i64, i64)] {
        match self {
            Preset::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Preset::Blinker => &[(1, 0), (1, 1), (1, 2)],
            Preset::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Preset::Beacon => &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
            Preset::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
            Preset::Lwss => &[
                (1, 0),
                (4, 0),
                (0, 1),
                (0, 2),
                (4, 2),
                (0, 3),
                (1, 3),
                (2, 3),
                (3, 3),
            ],
            Preset::RPentomino => &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
            Preset::GliderGun => &[
                (24, 0),
                (22, 1),
                (24, 1),
                (12, 2),
                (13, 2),
                (20, 2),
                (21, 2),
                (34, 2),
                (35, 2),
                (11, 3),
                (15, 3),
                (20, 3),
                (21, 3),
                (34, 3),
                (35, 3),
                (0, 4),
                (1, 4),
                (10, 4),
                (16, 4),
                (20, 4),
                (21, 4),
                (0, 5),
                (1, 5),
                (10, 5),
                (14, 5),
                (16, 5),
                (17, 5),
                (22, 5),
                (24, 5),
                (10, 6),
                (16, 6),
                (24, 6),
                (11, 7),
                (15, 7),
                (12, 8),
                (13, 8),
            ],
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        self.coordinates().iter().map(|&pos| Cell::from(pos))
    }

    /// the preset translated so that the middle of its bounding box lands on `center`.
    pub fn centered_on(self, center: Cell) -> impl Iterator<Item = Cell> {
        let (min, max) = self.coordinates().iter().fold(
            ((i64::MAX, i64::MAX), (i64::MIN, i64::MIN)),
            |((min_x, min_y), (max_x, max_y)), &(x, y)| {
                ((min_x.min(x), min_y.min(y)), (max_x.max(x), max_y.max(y)))
            },
        );
        let middle = cell!(min.0 + (max.0 - min.0) / 2, min.1 + (max.1 - min.1) / 2);
        let offset = center - middle;
        self.cells().map(move |cell| cell + offset)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Fills a `width` x `height` rectangle starting at `origin`, each cell alive with probability `density`.
pub fn soup(origin: Cell, width: u16, height: u16, density: f64, seed: Option<u64>) -> Vec<Cell> {
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_os_rng()
    };
    let density = density.clamp(0.0, 1.0);
    let mut result = vec![];
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            if rng.random_bool(density) {
                result.push(origin + cell!(x, y));
            }
        }
    }
    result
}
