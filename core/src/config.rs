use serde::{Deserialize, Serialize};

use crate::*;

/// How many mines a board of a given size receives.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinePolicy {
    /// `floor(size² × ratio)`, ratio within `[0, 1]`.
    Ratio(f64),
    /// A fixed number of mines.
    Count(CellCount),
}

impl MinePolicy {
    pub const DEFAULT_RATIO: f64 = 0.25;

    pub fn mine_count(self, size: Coord) -> Result<CellCount> {
        let capacity = square(size);
        match self {
            Self::Ratio(ratio) if !(0.0..=1.0).contains(&ratio) => {
                Err(GameError::InvalidMineRatio)
            }
            Self::Ratio(ratio) => Ok((f64::from(capacity) * ratio).floor() as CellCount),
            Self::Count(requested) if requested > capacity => Err(GameError::TooManyMines {
                requested,
                capacity,
            }),
            Self::Count(count) => Ok(count),
        }
    }
}

impl Default for MinePolicy {
    fn default() -> Self {
        Self::Ratio(Self::DEFAULT_RATIO)
    }
}

/// Board parameters for one session; reused as-is on reset.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    #[serde(default)]
    pub mine_policy: MinePolicy,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 10;

    pub const fn new(size: Coord, mine_policy: MinePolicy) -> Self {
        Self { size, mine_policy }
    }

    pub const fn with_mines(size: Coord, mines: CellCount) -> Self {
        Self::new(size, MinePolicy::Count(mines))
    }

    /// Resolves the policy against the board, failing on unplayable combinations.
    pub fn mine_count(&self) -> Result<CellCount> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }
        self.mine_policy.mine_count(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, MinePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quarter_of_ten_by_ten() {
        let config = GameConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.mine_count(), Ok(25));
    }

    #[test]
    fn ratio_rounds_down() {
        assert_eq!(MinePolicy::Ratio(0.25).mine_count(7), Ok(12));
        assert_eq!(MinePolicy::Ratio(0.0).mine_count(7), Ok(0));
        assert_eq!(MinePolicy::Ratio(1.0).mine_count(7), Ok(49));
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        assert_eq!(
            MinePolicy::Ratio(1.5).mine_count(4),
            Err(GameError::InvalidMineRatio)
        );
        assert_eq!(
            MinePolicy::Ratio(f64::NAN).mine_count(4),
            Err(GameError::InvalidMineRatio)
        );
    }

    #[test]
    fn count_beyond_capacity_is_rejected() {
        assert_eq!(
            GameConfig::with_mines(2, 5).mine_count(),
            Err(GameError::TooManyMines {
                requested: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            GameConfig::with_mines(0, 0).mine_count(),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn policy_defaults_when_missing_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{"size": 8}"#).unwrap();
        assert_eq!(config.mine_policy, MinePolicy::Ratio(0.25));

        let config: GameConfig =
            serde_json::from_str(r#"{"size": 8, "mine_policy": {"count": 3}}"#).unwrap();
        assert_eq!(config.mine_count(), Ok(3));
    }
}
