use super::*;

/// Replays a predetermined layout, for reproducing a known board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMineGenerator {
    mines: MineSet,
}

impl FixedMineGenerator {
    pub fn new<I>(mines: I) -> Self
    where
        I: IntoIterator<Item = Coord2>,
    {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, size: Coord, count: CellCount) -> Result<MineSet> {
        check_capacity(size, count)?;

        if self.mines.iter().any(|&(row, column)| row >= size || column >= size) {
            return Err(GameError::InvalidCoords);
        }

        let actual = self.mines.len() as CellCount;
        if actual != count {
            return Err(GameError::LayoutMismatch {
                expected: count,
                actual,
            });
        }

        Ok(self.mines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_layout() {
        let mut generator = FixedMineGenerator::new([(0, 0), (1, 2)]);
        let mines = generator.generate(3, 2).unwrap();
        assert_eq!(mines, MineSet::from([(0, 0), (1, 2)]));
        assert_eq!(generator.generate(3, 2).unwrap(), mines);
    }

    #[test]
    fn rejects_out_of_bounds_layout() {
        let mut generator = FixedMineGenerator::new([(0, 3)]);
        assert_eq!(generator.generate(3, 1), Err(GameError::InvalidCoords));
    }

    #[test]
    fn rejects_count_mismatch() {
        let mut generator = FixedMineGenerator::new([(0, 0)]);
        assert_eq!(
            generator.generate(3, 2),
            Err(GameError::LayoutMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
