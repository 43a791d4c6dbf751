use serde::{Deserialize, Serialize};

/// Authoritative per-cell state held by a [`Grid`](crate::Grid).
///
/// Fields are private so that a cell can never be opened and flagged at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    mine: bool,
    opened: bool,
    flagged: bool,
    adjacent: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Number of mines among the up-to-8 neighbours, fixed once mines are placed.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent
    }

    pub(crate) fn set_mine(&mut self) {
        self.mine = true;
    }

    pub(crate) fn set_adjacent(&mut self, adjacent: u8) {
        self.adjacent = adjacent;
    }

    /// Opens the cell, returns `false` if it was already open or is flagged.
    pub(crate) fn open(&mut self) -> bool {
        if self.opened || self.flagged {
            return false;
        }
        self.opened = true;
        true
    }

    /// Flips the flag on a closed cell, returns `false` if the cell is open.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.opened {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }
}

/// Player-visible snapshot of a cell, as handed to renderers.
///
/// `mine` is only disclosed once the cell is opened or the game is over, and
/// `adjacent_mine_count` only once the cell is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub opened: bool,
    pub flagged: bool,
    pub mine: Option<bool>,
    pub adjacent_mine_count: Option<u8>,
}

impl CellState {
    pub fn snapshot(cell: &Cell, game_over: bool) -> Self {
        Self {
            opened: cell.is_opened(),
            flagged: cell.is_flagged(),
            mine: (cell.is_opened() || game_over).then_some(cell.is_mine()),
            adjacent_mine_count: cell.is_opened().then_some(cell.adjacent_mine_count()),
        }
    }
}
