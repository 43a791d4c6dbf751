//! Rules engine for a square-grid minesweeper.
//!
//! A [`GameSession`] asks a [`MineGenerator`] for a layout, places it on a
//! [`Grid`], then takes reveal and flag commands until the game is won or lost.
//! Renderers read [`CellState`] snapshots and never hold game state of their own.

pub use api::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod api;
mod cell;
mod config;
mod error;
mod generator;
mod grid;
mod reveal;
mod session;
mod types;
