use serde::{Deserialize, Serialize};

use crate::*;

/// Coordinate-addressed input forwarded by a presentation layer.
///
/// Left click maps to `Reveal`, right click to `ToggleFlag`, the restart
/// button to `Reset`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    Start { config: GameConfig },
    Reveal { row: Coord, column: Coord },
    ToggleFlag { row: Coord, column: Coord },
    Reset,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Started(StartReply),
    Revealed(RevealReply),
    Flagged(FlagReply),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartReply {
    pub mine_count: CellCount,
}

/// What a renderer learns about one cell disclosed by a reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellContent {
    Count(u8),
    Mine,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenedCell {
    pub row: Coord,
    pub column: Coord,
    pub content: CellContent,
}

impl OpenedCell {
    pub const fn new((row, column): Coord2, content: CellContent) -> Self {
        Self {
            row,
            column,
            content,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealReply {
    pub status: GameStatus,
    pub opened_cells: Vec<OpenedCell>,
}

impl RevealReply {
    pub const fn unchanged(status: GameStatus) -> Self {
        Self {
            status,
            opened_cells: Vec::new(),
        }
    }

    /// Whether this reply could have caused an update to the game
    pub fn has_update(&self) -> bool {
        !self.opened_cells.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReply {
    /// Flag state of the cell after the command.
    pub flagged: bool,
    pub changed: bool,
}
