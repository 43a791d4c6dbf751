use std::fmt::Write as _;

use sweeper_core::{CellState, GameSession, MineGenerator};

/// Character for one cell, from the player's point of view.
pub fn glyph(state: &CellState) -> char {
    match state {
        CellState { flagged: true, .. } => 'F',
        CellState {
            mine: Some(true), ..
        } => '*',
        CellState {
            adjacent_mine_count: Some(0),
            ..
        } => '.',
        CellState {
            adjacent_mine_count: Some(count),
            ..
        } => char::from_digit(u32::from(*count), 10).unwrap_or('?'),
        _ => '#',
    }
}

/// Draws the status line and the board with row and column indexes.
pub fn render<G: MineGenerator>(session: &GameSession<G>) -> String {
    let size = session.size();
    let width = (size.saturating_sub(1)).to_string().len() + 1;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "mines left: {}   status: {}",
        session.mines_left(),
        session.status_text()
    );

    let _ = write!(out, "{:width$}", "");
    for column in 0..size {
        let _ = write!(out, "{column:>width$}");
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{row:>width$}");
        for column in 0..size {
            let cell = session
                .cell_state((row, column))
                .map_or('#', |state| glyph(&state));
            let _ = write!(out, "{cell:>width$}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use sweeper_core::{Coord, FixedMineGenerator, GameConfig};

    use super::*;

    fn session(mines: &[(Coord, Coord)]) -> GameSession<FixedMineGenerator> {
        let mut session = GameSession::with_generator(FixedMineGenerator::new(mines.to_vec()));
        session
            .start(GameConfig::with_mines(3, mines.len() as u32))
            .unwrap();
        session
    }

    #[test]
    fn glyphs() {
        let closed = CellState {
            opened: false,
            flagged: false,
            mine: None,
            adjacent_mine_count: None,
        };
        assert_eq!(glyph(&closed), '#');
        assert_eq!(glyph(&CellState { flagged: true, ..closed }), 'F');
        assert_eq!(glyph(&CellState { mine: Some(true), ..closed }), '*');

        let opened = CellState {
            opened: true,
            mine: Some(false),
            adjacent_mine_count: Some(3),
            ..closed
        };
        assert_eq!(glyph(&opened), '3');
        assert_eq!(
            glyph(&CellState {
                adjacent_mine_count: Some(0),
                ..opened
            }),
            '.'
        );
    }

    #[test]
    fn fresh_board_is_closed() {
        let session = session(&[(0, 0)]);
        assert_eq!(
            render(&session),
            "mines left: 1   status: START\n   0 1 2\n 0 # # #\n 1 # # #\n 2 # # #\n"
        );
    }

    #[test]
    fn lost_board_shows_mines_and_flags() {
        let mut session = session(&[(0, 0), (0, 2)]);
        session.reveal((1, 1));
        session.toggle_flag((2, 2));
        session.reveal((0, 0));

        assert_eq!(
            render(&session),
            "mines left: 1   status: LOSE\n   0 1 2\n 0 * # *\n 1 # 2 #\n 2 # # F\n"
        );
    }
}
