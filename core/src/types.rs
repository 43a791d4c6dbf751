use ndarray::Array2;

/// Single coordinate axis, used for the board side length and for positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with side `size`.
pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size * size
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, columns) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(columns).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i32, i32), bounds: Coord2) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    let (rows, columns) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    if next_column >= columns {
        return None;
    }

    Some((next_row, next_column))
}

/// Iterates the in-bounds cells at Chebyshev distance 1 from `center`.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (10, 10)).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(NeighborIter::new((0, 5), (10, 10)).count(), 5);
        assert_eq!(NeighborIter::new((9, 5), (10, 10)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors_excluding_center() {
        let neighbors: Vec<_> = NeighborIter::new((4, 4), (10, 10)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(4, 4)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn square_counts_cells() {
        assert_eq!(square(10), 100);
        assert_eq!(square(Coord::MAX), 65535 * 65535);
    }
}
