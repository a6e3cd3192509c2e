use crate::Cell;

/// The set of cells alive in one generation.
///
/// A cell is present iff it is alive. Every operation is total: any pair of
/// coordinates is valid, negative ones included.
pub trait World: Default + Clone + Send + 'static {
    fn contains(&self, cell: Cell) -> bool;

    /// inserts the cell, returns whether it was dead before.
    fn add(&mut self, cell: Cell) -> bool;

    /// removes the cell, returns whether it was alive before.
    fn remove(&mut self, cell: Cell) -> bool;

    fn clear(&mut self);

    /// every alive cell, in no particular order.
    fn cells(&self) -> impl Iterator<Item = Cell> + '_;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn toggle(&mut self, cell: Cell) {
        if !self.remove(cell) {
            self.add(cell);
        }
    }

    /// smallest and largest corner of the rectangle holding every alive cell.
    fn bounding_box(&self) -> Option<(Cell, Cell)> {
        self.cells().fold(None, |bounds, cell| match bounds {
            None => Some((cell, cell)),
            Some((min, max)) => Some((
                Cell::new(min.x.min(cell.x), min.y.min(cell.y)),
                Cell::new(max.x.max(cell.x), max.y.max(cell.y)),
            )),
        })
    }
}

pub use cell_set::CellSet;
mod cell_set;

pub use chunked_world::ChunkedWorld;
mod chunked_world;
