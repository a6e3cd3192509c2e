use std::collections::HashMap;

use metrohash::MetroBuildHasher;

use crate::{cell, Cell, World};

const CHUNK_SIZE: usize = 16;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Chunk {
    cells: [[bool; CHUNK_SIZE]; CHUNK_SIZE],
    population: usize,
}

impl Chunk {
    fn get(&self, local: Cell) -> bool {
        self.cells[local.x as usize][local.y as usize]
    }

    /// returns whether the cell changed.
    fn set(&mut self, local: Cell, alive: bool) -> bool {
        let slot = &mut self.cells[local.x as usize][local.y as usize];
        if *slot == alive {
            return false;
        }
        *slot = alive;
        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        true
    }

    fn actives(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(y, alive)| alive.then_some(cell!(x as i64, y as i64)))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChunkPos(Cell);

/// Alive cells grouped into 16x16 chunks, only chunks with a living cell are stored.
#[derive(Debug, Clone, Default)]
pub struct ChunkedWorld {
    chunks: HashMap<ChunkPos, Chunk, MetroBuildHasher>,
    population: usize,
}

impl ChunkedWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// gets the position of the chunk containing the passed cell
    fn chunk_pos(Cell { x, y }: Cell) -> ChunkPos {
        let x = snap(x, CHUNK_SIZE as i64);
        let y = snap(y, CHUNK_SIZE as i64);
        ChunkPos(cell!(x, y))
    }

    /// gets the position of a cell local to its parent chunk.
    fn local_pos(cell: Cell) -> Cell {
        let ChunkPos(chunk_pos) = Self::chunk_pos(cell);
        cell - chunk_pos
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// rounds `n` down to the closest multiple of `step`, towards negative infinity.
pub fn snap(n: i64, step: i64) -> i64 {
    n - n.rem_euclid(step)
}

impl World for ChunkedWorld {
    fn contains(&self, cell: Cell) -> bool {
        self.chunks
            .get(&Self::chunk_pos(cell))
            .is_some_and(|chunk| chunk.get(Self::local_pos(cell)))
    }

    fn add(&mut self, cell: Cell) -> bool {
        let chunk = self.chunks.entry(Self::chunk_pos(cell)).or_default();
        let changed = chunk.set(Self::local_pos(cell), true);
        if changed {
            self.population += 1;
        }
        changed
    }

    fn remove(&mut self, cell: Cell) -> bool {
        let chunk_pos = Self::chunk_pos(cell);
        let Some(chunk) = self.chunks.get_mut(&chunk_pos) else {
            return false;
        };
        let changed = chunk.set(Self::local_pos(cell), false);
        if chunk.population == 0 {
            self.chunks.remove(&chunk_pos);
        }
        if changed {
            self.population -= 1;
        }
        changed
    }

    fn clear(&mut self) {
        self.chunks.clear();
        self.population = 0;
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.chunks
            .iter()
            .flat_map(|(ChunkPos(chunk_pos), chunk)| chunk.actives().map(move |pos| *chunk_pos + pos))
    }

    fn len(&self) -> usize {
        self.population
    }
}

impl FromIterator<Cell> for ChunkedWorld {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut result = Self::default();
        result.extend(iter);
        result
    }
}

impl Extend<Cell> for ChunkedWorld {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.add(cell);
        }
    }
}

#[test]
fn test_snap() {
    assert_eq!(snap(0, 10), 0);
    assert_eq!(snap(1, 10), 0);
    assert_eq!(snap(-1, 10), -10);
    assert_eq!(snap(-10, 10), -10);
    assert_eq!(snap(10, 10), 10);
    assert_eq!(snap(11, 10), 10);
}

#[test]
fn test_negative_coordinates() {
    let mut world = ChunkedWorld::new();
    for cell in [cell!(-1, -1), cell!(-16, 0), cell!(-17, 15), cell!(0, -16)] {
        assert!(world.add(cell));
        assert!(world.contains(cell));
    }
    assert!(!world.contains(cell!(-2, -1)));
    assert_eq!(world.len(), 4);

    let mut cells: Vec<_> = world.cells().collect();
    cells.sort();
    assert_eq!(
        cells,
        vec![cell!(-17, 15), cell!(-16, 0), cell!(-1, -1), cell!(0, -16)]
    );
}

#[test]
fn test_empty_chunks_are_dropped() {
    let mut world = ChunkedWorld::new();
    world.add(cell!(3, 3));
    world.add(cell!(40, 40));
    assert_eq!(world.chunk_count(), 2);

    world.toggle(cell!(3, 3));
    assert_eq!(world.chunk_count(), 1);
    assert!(!world.remove(cell!(3, 3)));
    assert_eq!(world.len(), 1);

    world.clear();
    assert_eq!(world.chunk_count(), 0);
    assert!(world.is_empty());
}
