use golrs::{
    cell,
    engine::{advance, advance_by, candidates, neighbor_count},
    pattern::soup,
    Cell, CellSet, ChunkedWorld, World,
};

const SEED: u64 = 42;

fn world<W: World + FromIterator<Cell>>(cells: &[(i64, i64)]) -> W {
    cells.iter().map(|&c| Cell::from(c)).collect()
}

fn sorted<W: World>(world: &W) -> Vec<Cell> {
    let mut cells: Vec<_> = world.cells().collect();
    cells.sort();
    cells
}

fn check_still_life<W: World + FromIterator<Cell>>() {
    let block: W = world(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(sorted(&advance(&block)), sorted(&block));
}

fn check_blinker<W: World + FromIterator<Cell>>() {
    let vertical: W = world(&[(1, 0), (1, 1), (1, 2)]);
    let horizontal: W = world(&[(0, 1), (1, 1), (2, 1)]);
    let next = advance(&vertical);
    assert_eq!(sorted(&next), sorted(&horizontal));
    assert_eq!(sorted(&advance(&next)), sorted(&vertical));
}

fn check_extinction<W: World + FromIterator<Cell>>() {
    let lonely: W = world(&[(5, 5)]);
    assert!(advance(&lonely).is_empty());
}

fn check_birth<W: World + FromIterator<Cell>>() {
    let l_shape: W = world(&[(0, 0), (1, 0), (0, 1)]);
    assert_eq!(neighbor_count(&l_shape, cell!(1, 1)), 3);
    let next = advance(&l_shape);
    assert!(next.contains(cell!(1, 1)));
    assert_eq!(next.len(), 4);
}

#[test]
fn test_block_is_still_life() {
    check_still_life::<CellSet>();
    check_still_life::<ChunkedWorld>();
}

#[test]
fn test_blinker_has_period_two() {
    check_blinker::<CellSet>();
    check_blinker::<ChunkedWorld>();
}

#[test]
fn test_isolated_cell_dies() {
    check_extinction::<CellSet>();
    check_extinction::<ChunkedWorld>();
}

#[test]
fn test_three_neighbors_give_birth() {
    check_birth::<CellSet>();
    check_birth::<ChunkedWorld>();
}

#[test]
fn test_toggle_twice_is_noop() {
    let mut board: ChunkedWorld = soup(cell!(-8, -8), 16, 16, 0.5, Some(SEED)).into_iter().collect();
    let before = sorted(&board);
    for c in [cell!(0, 0), cell!(-8, -8), cell!(1_000, -1_000), cell!(7, 7)] {
        let was_alive = board.contains(c);
        board.toggle(c);
        assert_eq!(board.contains(c), !was_alive);
        board.toggle(c);
        assert_eq!(board.contains(c), was_alive);
    }
    assert_eq!(sorted(&board), before);
}

#[test]
fn test_translation_invariance() {
    let offsets = [cell!(0, 0), cell!(17, -3), cell!(-1_000_003, 999), cell!(i64::MAX / 2, i64::MIN / 2)];
    for (index, offset) in offsets.into_iter().enumerate() {
        let pattern: CellSet = soup(cell!(0, 0), 24, 24, 0.35, Some(SEED + index as u64))
            .into_iter()
            .collect();
        let translate = |world: &CellSet| -> CellSet { world.cells().map(|c| c + offset).collect() };

        let advanced_then_moved = translate(&advance_by(&pattern, 3));
        let moved_then_advanced = advance_by(&translate(&pattern), 3);
        assert_eq!(advanced_then_moved, moved_then_advanced, "offset {offset:?}");
    }
}

#[test]
fn test_nothing_outside_candidates_is_born() {
    let pattern: CellSet = soup(cell!(-10, -10), 20, 20, 0.3, Some(SEED)).into_iter().collect();
    let candidates = candidates(&pattern);
    let next = advance(&pattern);
    for c in next.cells() {
        assert!(candidates.contains(&c), "{c:?} was not a candidate");
    }
    // the ring just outside the candidate area has no alive neighbor
    for x in -13..13 {
        for c in [cell!(x, -13), cell!(x, 12)] {
            assert_eq!(neighbor_count(&pattern, c), 0);
            assert!(!next.contains(c));
        }
    }
}

#[test]
fn test_backends_agree() {
    for seed in 0..4 {
        let cells = soup(cell!(-20, -20), 40, 40, 0.3, Some(SEED + seed));
        let mut flat: CellSet = cells.iter().copied().collect();
        let mut chunked: ChunkedWorld = cells.into_iter().collect();
        for _ in 0..20 {
            flat = advance(&flat);
            chunked = advance(&chunked);
            assert_eq!(flat.len(), chunked.len());
            assert_eq!(sorted(&flat), sorted(&chunked));
        }
    }
}

#[test]
fn test_empty_board_is_stable() {
    assert!(advance_by(&CellSet::new(), 5).is_empty());
    assert!(advance_by(&ChunkedWorld::new(), 5).is_empty());
}
