use std::ops::{Add, Sub};

/// A position on the unbounded plane.
///
/// Arithmetic wraps at the `i64` extremes instead of panicking, so a glider
/// travelling for long enough ends up on the opposite side of the plane.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! cell {
    ($x:expr, $y:expr) => {
        $crate::Cell { x: $x, y: $y }
    };
}

impl Cell {
    pub fn new(x: i64, y: i64) -> Self {
        cell!(x, y)
    }

    /// the 8 cells of the moore neighborhood, the cell itself excluded.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS.iter().map(move |&offset| self + offset)
    }
}

const NEIGHBOR_OFFSETS: [Cell; 8] = [
    cell!(-1, -1),
    cell!(0, -1),
    cell!(1, -1),
    cell!(-1, 0),
    cell!(1, 0),
    cell!(-1, 1),
    cell!(0, 1),
    cell!(1, 1),
];

impl Add for Cell {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        cell!(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Cell {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        cell!(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        cell!(x, y)
    }
}

#[test]
fn test_neighbors() {
    let center = cell!(10, -3);
    let neighbors: Vec<_> = center.neighbors().collect();
    assert_eq!(neighbors.len(), 8);
    assert!(!neighbors.contains(&center));
    assert!(neighbors.contains(&cell!(9, -4)));
    assert!(neighbors.contains(&cell!(11, -2)));
}

#[test]
fn test_wrapping() {
    let edge = cell!(i64::MAX, i64::MIN);
    assert_eq!(edge + cell!(1, -1), cell!(i64::MIN, i64::MAX));
    assert_eq!(cell!(i64::MIN, 0) - cell!(1, 0), cell!(i64::MAX, 0));
}
