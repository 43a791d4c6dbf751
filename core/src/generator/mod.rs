use std::collections::BTreeSet;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Distinct mine coordinates produced by a [`MineGenerator`].
pub type MineSet = BTreeSet<Coord2>;

/// Source of mine layouts for a square board.
pub trait MineGenerator {
    /// Produces exactly `count` distinct in-bounds coordinates on a `size × size` board.
    fn generate(&mut self, size: Coord, count: CellCount) -> Result<MineSet>;
}

impl<G: MineGenerator + ?Sized> MineGenerator for Box<G> {
    fn generate(&mut self, size: Coord, count: CellCount) -> Result<MineSet> {
        (**self).generate(size, count)
    }
}

/// Rejects requests that cannot be satisfied before any sampling happens.
fn check_capacity(size: Coord, count: CellCount) -> Result<()> {
    if size == 0 {
        return Err(GameError::InvalidSize);
    }
    let capacity = square(size);
    if count > capacity {
        log::warn!(
            "Refusing to generate minefield, requested {} but only fits {}",
            count,
            capacity
        );
        return Err(GameError::TooManyMines {
            requested: count,
            capacity,
        });
    }
    Ok(())
}

fn all_cells(size: Coord) -> impl Iterator<Item = Coord2> {
    (0..size).flat_map(move |row| (0..size).map(move |column| (row, column)))
}
