use std::{fs, path::Path};

use anyhow::{Context, bail};
use serde::Deserialize;
use sweeper_core::{CellCount, Coord, GameConfig, MinePolicy};

/// Game settings as they come from a TOML file or the command line.
///
/// ```toml
/// size = 16
/// ratio = 0.2   # or: mines = 40
/// seed = 1234
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub size: Option<Coord>,
    pub ratio: Option<f64>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Layers `overrides` on top of `self`.
    ///
    /// Mine ratio and mine count are one setting: if the overrides name either,
    /// both are taken from the overrides.
    pub fn merge(self, overrides: Settings) -> Settings {
        let (ratio, mines) = if overrides.ratio.is_some() || overrides.mines.is_some() {
            (overrides.ratio, overrides.mines)
        } else {
            (self.ratio, self.mines)
        };
        Settings {
            size: overrides.size.or(self.size),
            ratio,
            mines,
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mine_policy = match (self.ratio, self.mines) {
            (Some(_), Some(_)) => bail!("Set either a mine ratio or a mine count, not both"),
            (Some(ratio), None) => MinePolicy::Ratio(ratio),
            (None, Some(mines)) => MinePolicy::Count(mines),
            (None, None) => MinePolicy::default(),
        };
        let config = GameConfig::new(self.size.unwrap_or(GameConfig::DEFAULT_SIZE), mine_policy);
        config.mine_count().context("Unplayable board settings")?;
        Ok(config)
    }
}
