//! Generation advance under the B3/S23 rule.
//!
//! Only cells that are alive or touch an alive cell can be alive in the next
//! generation, so those are the only ones evaluated. Counting always reads
//! the previous generation through a shared borrow while the next one is
//! built into a fresh world.

use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, World};

/// the rule table: whether a cell is alive next generation.
pub fn next_state(alive: bool, neighbor_count: usize) -> bool {
    match (alive, neighbor_count) {
        (true, 2 | 3) => true, // stays
        (false, 3) => true,    // becomes alive
        _ => false,            // dies or stays dead
    }
}

pub fn neighbor_count<W: World>(world: &W, cell: Cell) -> usize {
    cell.neighbors().filter(|&n| world.contains(n)).count()
}

/// alive cells and every neighbor of an alive cell.
pub fn candidates<W: World>(world: &W) -> HashSet<Cell, MetroBuildHasher> {
    let mut result = HashSet::with_capacity_and_hasher(world.len() * 9, MetroBuildHasher::default());
    for cell in world.cells() {
        result.insert(cell);
        result.extend(cell.neighbors());
    }
    result
}

pub fn advance<W: World>(current: &W) -> W {
    let mut next = W::default();
    for cell in candidates(current) {
        let alive = current.contains(cell);
        if next_state(alive, neighbor_count(current, cell)) {
            next.add(cell);
        }
    }
    next
}

pub fn advance_by<W: World>(current: &W, generations: usize) -> W {
    let mut world = current.clone();
    for _ in 0..generations {
        world = advance(&world);
    }
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell, CellSet, ChunkedWorld};

    fn set(cells: &[(i64, i64)]) -> CellSet {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_rule_table() {
        for count in 0..=8 {
            assert_eq!(next_state(true, count), count == 2 || count == 3);
            assert_eq!(next_state(false, count), count == 3);
        }
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let world = set(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(neighbor_count(&world, cell!(0, 0)), 3);
        assert_eq!(neighbor_count(&world, cell!(2, 2)), 1);
        assert_eq!(neighbor_count(&world, cell!(-1, 0)), 2);
        assert_eq!(neighbor_count(&world, cell!(5, 5)), 0);
    }

    #[test]
    fn test_candidates() {
        assert!(candidates(&CellSet::new()).is_empty());
        assert_eq!(candidates(&set(&[(0, 0)])).len(), 9);
        // two adjacent cells share 6 of their neighborhoods
        assert_eq!(candidates(&set(&[(0, 0), (1, 0)])).len(), 12);
    }

    #[test]
    fn test_empty_stays_empty() {
        assert!(advance(&CellSet::new()).is_empty());
        assert!(advance(&ChunkedWorld::new()).is_empty());
    }

    #[test]
    fn test_block_is_still() {
        let block = set(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = set(&[(1, 0), (1, 1), (1, 2)]);
        let horizontal = set(&[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(advance(&vertical), horizontal);
        assert_eq!(advance(&horizontal), vertical);
        assert_eq!(advance_by(&vertical, 10), vertical);
    }

    #[test]
    fn test_lonely_cell_dies() {
        assert!(advance(&set(&[(5, 5)])).is_empty());
    }

    #[test]
    fn test_l_shape_births_corner() {
        let next = advance(&set(&[(0, 0), (1, 0), (0, 1)]));
        assert!(next.contains(cell!(1, 1)));
        // each original cell has exactly 2 neighbors and survives
        assert_eq!(next, set(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_far_from_origin() {
        let offset = cell!(-4_000_000_000_000, 9_000_000_000_000);
        let blinker: CellSet = [cell!(1, 0), cell!(1, 1), cell!(1, 2)]
            .into_iter()
            .map(|c| c + offset)
            .collect();
        let expected: CellSet = [cell!(0, 1), cell!(1, 1), cell!(2, 1)]
            .into_iter()
            .map(|c| c + offset)
            .collect();
        assert_eq!(advance(&blinker), expected);
    }

    #[test]
    fn test_input_is_untouched() {
        let glider = set(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let copy = glider.clone();
        let _ = advance(&glider);
        assert_eq!(glider, copy);
    }
}
