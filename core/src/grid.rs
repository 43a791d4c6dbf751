use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Square board of [`Cell`]s, indexed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    size: Coord,
    mine_count: CellCount,
    opened_count: CellCount,
    flagged_count: CellCount,
    mines_placed: bool,
}

impl Grid {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            cells: Array2::default((size, size).to_nd_index()),
            size,
            mine_count: 0,
            opened_count: 0,
            flagged_count: 0,
            mines_placed: false,
        })
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened_count
    }

    pub fn unopened_safe_count(&self) -> CellCount {
        self.safe_cell_count() - self.opened_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn has_mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Returns the cell at `coords`, or `None` when out of bounds.
    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Marks the given cells as mines and fixes every cell's adjacency count.
    ///
    /// Allowed once per grid. Duplicate coordinates are counted once; any
    /// out-of-bounds coordinate rejects the whole placement.
    pub fn place_mines<I>(&mut self, mines: I) -> Result<()>
    where
        I: IntoIterator<Item = Coord2>,
    {
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }

        let mines = mines
            .into_iter()
            .map(|coords| self.validate_coords(coords))
            .collect::<Result<Vec<_>>>()?;

        for coords in mines {
            self.cells[coords.to_nd_index()].set_mine();
        }

        for row in 0..self.size {
            for column in 0..self.size {
                let coords = (row, column);
                let adjacent = self.count_adjacent_mines(coords);
                self.cells[coords.to_nd_index()].set_adjacent(adjacent);
            }
        }

        // bounded by size², which always fits
        self.mine_count = self.iter_mines().count() as CellCount;
        self.mines_placed = true;
        log::debug!(
            "placed {} mines on a {}x{} grid",
            self.mine_count,
            self.size,
            self.size
        );
        Ok(())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// The up-to-8 in-bounds cells around `coords`.
    pub fn neighbors_of(&self, coords: Coord2) -> impl Iterator<Item = &Cell> + '_ {
        self.iter_neighbors(coords)
            .map(|pos| &self.cells[pos.to_nd_index()])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Option<u8> {
        self.cell_at(coords).map(Cell::adjacent_mine_count)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
    }

    /// All cells in row-major order together with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, column), cell)| ((row as Coord, column as Coord), cell))
    }

    /// Opens a single cell without cascading. Mines and flagged cells stay closed.
    pub(crate) fn open(&mut self, coords: Coord2) -> bool {
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return false;
        };
        if cell.is_mine() || !cell.open() {
            return false;
        }
        self.opened_count += 1;
        true
    }

    /// Flips the flag at `coords`, returning the new flag state if it changed.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> Option<bool> {
        let cell = self.cells.get_mut(coords.to_nd_index())?;
        if !cell.toggle_flag() {
            return None;
        }
        let flagged = cell.is_flagged();
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Some(flagged)
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self.neighbors_of(coords).filter(|cell| cell.is_mine()).count();
        // at most 8 neighbours
        count as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord, mines: &[Coord2]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        grid.place_mines(mines.iter().copied()).unwrap();
        grid
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Grid::new(0), Err(GameError::InvalidSize));
    }

    #[test]
    fn cell_at_out_of_bounds_is_none() {
        let grid = grid(3, &[]);
        assert!(grid.cell_at((2, 2)).is_some());
        assert!(grid.cell_at((3, 0)).is_none());
        assert!(grid.cell_at((0, 3)).is_none());
    }

    #[test]
    fn adjacency_counts_match_neighbors() {
        let grid = grid(3, &[(0, 0), (0, 1), (2, 2)]);

        assert_eq!(grid.adjacent_mine_count((1, 0)), Some(2));
        assert_eq!(grid.adjacent_mine_count((1, 1)), Some(3));
        assert_eq!(grid.adjacent_mine_count((2, 0)), Some(0));
        assert_eq!(grid.adjacent_mine_count((0, 2)), Some(1));

        for (coords, cell) in grid.iter_cells() {
            let expected = grid.neighbors_of(coords).filter(|c| c.is_mine()).count();
            assert_eq!(usize::from(cell.adjacent_mine_count()), expected);
        }
    }

    #[test]
    fn duplicate_mines_count_once() {
        let grid = grid(4, &[(1, 1), (1, 1), (2, 3)]);
        assert_eq!(grid.mine_count(), 2);
        assert_eq!(grid.safe_cell_count(), 14);
    }

    #[test]
    fn place_mines_only_once() {
        let mut grid = grid(4, &[(1, 1)]);
        assert_eq!(
            grid.place_mines([(2, 2)]),
            Err(GameError::MinesAlreadyPlaced)
        );
        assert_eq!(grid.mine_count(), 1);
    }

    #[test]
    fn out_of_bounds_placement_leaves_grid_untouched() {
        let mut grid = Grid::new(4).unwrap();
        assert_eq!(
            grid.place_mines([(0, 0), (4, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert!(!grid.has_mines_placed());
        assert_eq!(grid.iter_mines().count(), 0);
    }

    #[test]
    fn open_skips_mines_and_counts_safe_cells() {
        let mut grid = grid(2, &[(0, 0)]);
        assert!(!grid.open((0, 0)));
        assert!(grid.open((1, 1)));
        assert!(!grid.open((1, 1)));
        assert_eq!(grid.opened_count(), 1);
        assert_eq!(grid.unopened_safe_count(), 2);
    }

    #[test]
    fn toggle_flag_reports_new_state() {
        let mut grid = grid(2, &[]);
        assert_eq!(grid.toggle_flag((0, 1)), Some(true));
        assert_eq!(grid.flagged_count(), 1);
        assert_eq!(grid.toggle_flag((0, 1)), Some(false));
        assert_eq!(grid.toggle_flag((5, 5)), None);

        grid.open((1, 0));
        assert_eq!(grid.toggle_flag((1, 0)), None);
        assert_eq!(grid.flagged_count(), 0);
    }

    #[test]
    fn flagged_count_follows_toggles() {
        let mut grid = grid(3, &[(0, 0)]);
        grid.toggle_flag((0, 0));
        grid.toggle_flag((2, 2));
        grid.toggle_flag((2, 1));
        assert_eq!(grid.flagged_count(), 3);

        grid.toggle_flag((2, 2));
        assert_eq!(grid.flagged_count(), 2);

        // rejected toggles leave the counter alone
        grid.open((1, 1));
        grid.toggle_flag((1, 1));
        grid.toggle_flag((3, 3));
        assert_eq!(grid.flagged_count(), 2);

        let scanned = grid.iter_cells().filter(|(_, cell)| cell.is_flagged()).count();
        assert_eq!(scanned, 2);
    }

    #[test]
    fn serializes_as_snapshot() {
        let mut grid = grid(2, &[(0, 0)]);
        grid.toggle_flag((1, 1));
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["mine_count"], 1);
        assert_eq!(json["flagged_count"], 1);
        assert_eq!(json["cells"]["dim"], serde_json::json!([2, 2]));
    }
}
