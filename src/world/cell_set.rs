use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, World};

/// Flat hash set of alive cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell, MetroBuildHasher>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl World for CellSet {
    fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    fn add(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    fn clear(&mut self) {
        self.cells.clear()
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut result = Self::default();
        result.extend(iter);
        result
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell;

    #[test]
    fn test_toggle_twice_restores() {
        let mut set: CellSet = [cell!(0, 0), cell!(-7, 3)].into_iter().collect();
        let before = set.clone();

        for cell in [cell!(0, 0), cell!(100, -100)] {
            set.toggle(cell);
            set.toggle(cell);
            assert_eq!(set, before);
        }

        set.toggle(cell!(-7, 3));
        assert!(!set.contains(cell!(-7, 3)));
        set.toggle(cell!(-7, 3));
        assert!(set.contains(cell!(-7, 3)));
    }

    #[test]
    fn test_add_remove_are_noops_when_state_matches() {
        let mut set = CellSet::new();
        assert!(set.add(cell!(-1, -1)));
        assert!(!set.add(cell!(-1, -1)));
        assert_eq!(set.len(), 1);

        assert!(set.remove(cell!(-1, -1)));
        assert!(!set.remove(cell!(-1, -1)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut set: CellSet = (0..10).map(|i| cell!(i, i * 2)).collect();
        assert_eq!(set.len(), 10);
        set.clear();
        assert!(set.is_empty());
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_cells_is_restartable() {
        let set: CellSet = [cell!(1, 2), cell!(3, 4), cell!(1, 2)].into_iter().collect();
        let mut first: Vec<_> = set.cells().collect();
        let mut second: Vec<_> = set.cells().collect();
        first.sort();
        second.sort();
        assert_eq!(first, vec![cell!(1, 2), cell!(3, 4)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(CellSet::new().bounding_box(), None);
        let set: CellSet = [cell!(-2, 5), cell!(3, -1), cell!(0, 0)].into_iter().collect();
        assert_eq!(set.bounding_box(), Some((cell!(-2, -1), cell!(3, 5))));
    }
}
