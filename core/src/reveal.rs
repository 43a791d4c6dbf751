use crate::*;

/// Opens the cell at `start` and cascades through zero-count neighbours.
///
/// Returns the coordinates opened by this call, in opening order. Nothing is
/// opened when `start` is out of bounds, already open, flagged, or a mine;
/// mine hits are the caller's business. Flagged cells also stop the cascade.
///
/// Works off an explicit stack, so region size does not grow the call stack.
pub fn reveal(grid: &mut Grid, start: Coord2) -> Vec<Coord2> {
    let mut opened = Vec::new();
    let mut to_visit = vec![start];

    while let Some(coords) = to_visit.pop() {
        if !grid.open(coords) {
            continue;
        }
        opened.push(coords);

        let adjacent = grid.adjacent_mine_count(coords).unwrap_or_default();
        log::trace!("Opened cell at {:?}, mine count: {}", coords, adjacent);

        if adjacent == 0 {
            to_visit.extend(grid.iter_neighbors(coords).filter(|&pos| {
                grid.cell_at(pos)
                    .is_some_and(|cell| !cell.is_opened() && !cell.is_flagged())
            }));
        }
    }

    if opened.len() > 1 {
        log::debug!("Flood-fill from {:?} opened {} cells", start, opened.len());
    }
    opened
}
