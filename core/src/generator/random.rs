use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform generator: samples coordinates at random and rejects duplicates.
///
/// Dense requests (more than half the board) sample the safe cells instead and
/// return the complement, so the rejection loop never has to find the last few
/// free cells of an almost full board.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    fn sample_distinct(&mut self, size: Coord, target: CellCount) -> MineSet {
        let mut picked = MineSet::new();
        while (picked.len() as CellCount) < target {
            let row = self.rng.random_range(0..size);
            let column = self.rng.random_range(0..size);
            if !picked.insert((row, column)) {
                log::trace!("Resampling duplicate at {:?}", (row, column));
            }
        }
        picked
    }
}

impl Default for RandomMineGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, size: Coord, count: CellCount) -> Result<MineSet> {
        check_capacity(size, count)?;

        let total_cells = square(size);

        // optimize for full boards
        if count == total_cells {
            return Ok(all_cells(size).collect());
        }

        let mines = if count > total_cells / 2 {
            let safe = self.sample_distinct(size, total_cells - count);
            all_cells(size)
                .filter(|coords| !safe.contains(coords))
                .collect()
        } else {
            self.sample_distinct(size, count)
        };

        log::debug!("Generated {} mines on a {}x{} board", mines.len(), size, size);
        Ok(mines)
    }
}
