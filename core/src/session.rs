use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - any -> Won, on start when the board has no safe cell
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> InProgress, on start or reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No board generated yet
    #[default]
    NotStarted,
    InProgress,
    /// Every safe cell opened
    Won,
    /// A mine was revealed
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and no moves can be made until reset
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns one game from generation to win/loss, and rebuilds it on reset.
///
/// Gameplay commands never fail: out-of-bounds coordinates, commands on a
/// finished game, and commands on cells that cannot take them all come back as
/// unchanged replies. Only [`start`](Self::start) and [`reset`](Self::reset)
/// can fail, when the configuration cannot be turned into a board.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomMineGenerator> {
    generator: G,
    config: GameConfig,
    grid: Option<Grid>,
    status: GameStatus,
    moves: u32,
    triggered_mine: Option<Coord2>,
}

impl GameSession<RandomMineGenerator> {
    pub fn new() -> Self {
        Self::with_generator(RandomMineGenerator::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(RandomMineGenerator::new(seed))
    }
}

impl Default for GameSession<RandomMineGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MineGenerator> GameSession<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            generator,
            config: GameConfig::default(),
            grid: None,
            status: GameStatus::NotStarted,
            moves: 0,
            triggered_mine: None,
        }
    }

    /// Generates a fresh board for `config` and starts playing on it.
    ///
    /// On error the previous game, if any, is left as it was.
    pub fn start(&mut self, config: GameConfig) -> Result<StartReply> {
        let mine_count = config.mine_count()?;
        let mines = self.generator.generate(config.size, mine_count)?;
        let mut grid = Grid::new(config.size)?;
        grid.place_mines(mines)?;

        let reply = StartReply {
            mine_count: grid.mine_count(),
        };
        log::debug!(
            "Starting {}x{} game with {} mines",
            config.size,
            config.size,
            reply.mine_count
        );

        // a board made only of mines has nothing left to open
        let status = if grid.unopened_safe_count() == 0 {
            log::debug!("No safe cells on the board, game won at start");
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };

        self.config = config;
        self.grid = Some(grid);
        self.status = status;
        self.moves = 0;
        self.triggered_mine = None;
        Ok(reply)
    }

    /// Starts over with the same configuration, discarding the current board.
    pub fn reset(&mut self) -> Result<StartReply> {
        log::debug!("Reset requested in state {:?}", self.status);
        self.start(self.config)
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealReply {
        let status = self.status;
        if !status.is_in_progress() {
            return RevealReply::unchanged(status);
        }
        let Some(grid) = self.grid.as_mut() else {
            return RevealReply::unchanged(status);
        };
        let Some(cell) = grid.cell_at(coords).copied() else {
            return RevealReply::unchanged(status);
        };
        if cell.is_opened() || cell.is_flagged() {
            return RevealReply::unchanged(status);
        }

        if cell.is_mine() {
            log::debug!("Mine hit at {:?}", coords);
            self.status = GameStatus::Lost;
            self.triggered_mine = Some(coords);
            return RevealReply {
                status: self.status,
                opened_cells: disclose_mines(grid),
            };
        }

        let mut opened_cells: Vec<_> = reveal(grid, coords)
            .into_iter()
            .map(|pos| {
                let count = grid.adjacent_mine_count(pos).unwrap_or_default();
                OpenedCell::new(pos, CellContent::Count(count))
            })
            .collect();

        if grid.unopened_safe_count() == 0 {
            log::debug!("All safe cells opened, game won");
            self.status = GameStatus::Won;
            opened_cells.extend(disclose_mines(grid));
        } else {
            self.moves += 1;
        }

        RevealReply {
            status: self.status,
            opened_cells,
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagReply {
        let status = self.status;
        let Some(grid) = self.grid.as_mut() else {
            return FlagReply {
                flagged: false,
                changed: false,
            };
        };
        let flagged = grid.cell_at(coords).is_some_and(Cell::is_flagged);

        if !status.is_in_progress() {
            return FlagReply {
                flagged,
                changed: false,
            };
        }

        match grid.toggle_flag(coords) {
            Some(flagged) => {
                log::trace!("Flag at {:?} set to {}", coords, flagged);
                FlagReply {
                    flagged,
                    changed: true,
                }
            }
            None => FlagReply {
                flagged,
                changed: false,
            },
        }
    }

    /// Forwards a presentation-layer command to the matching operation.
    pub fn dispatch(&mut self, command: Command) -> Result<Reply> {
        Ok(match command {
            Command::Start { config } => Reply::Started(self.start(config)?),
            Command::Reveal { row, column } => Reply::Revealed(self.reveal((row, column))),
            Command::ToggleFlag { row, column } => {
                Reply::Flagged(self.toggle_flag((row, column)))
            }
            Command::Reset => Reply::Started(self.reset()?),
        })
    }

    /// Player-visible snapshot of one cell, `None` when out of bounds or not started.
    pub fn cell_state(&self, coords: Coord2) -> Option<CellState> {
        let game_over = self.status.is_finished();
        self.grid
            .as_ref()?
            .cell_at(coords)
            .map(|cell| CellState::snapshot(cell, game_over))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn size(&self) -> Coord {
        self.grid.as_ref().map_or(self.config.size, Grid::size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.grid.as_ref().map_or(0, Grid::mine_count)
    }

    /// How many mines have not been flagged yet, negative with excess flags
    pub fn mines_left(&self) -> i64 {
        self.grid.as_ref().map_or(0, |grid| {
            i64::from(grid.mine_count()) - i64::from(grid.flagged_count())
        })
    }

    pub fn remaining_safe_cells(&self) -> CellCount {
        self.grid.as_ref().map_or(0, Grid::unopened_safe_count)
    }

    /// Successful reveals that kept the game going; display only.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Status line: `START`, then the move number, then `WIN` or `LOSE`.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::NotStarted => "START".into(),
            GameStatus::InProgress if self.moves == 0 => "START".into(),
            GameStatus::InProgress => self.moves.to_string(),
            GameStatus::Won => "WIN".into(),
            GameStatus::Lost => "LOSE".into(),
        }
    }
}

fn disclose_mines(grid: &Grid) -> Vec<OpenedCell> {
    grid.iter_mines()
        .map(|coords| OpenedCell::new(coords, CellContent::Mine))
        .collect()
}
