//! The game state and turn-resolution engine

pub mod resolve;
pub mod state;
pub mod turn;

pub use resolve::EventOutcome;
pub use state::{GameState, GameStatus, HistoryEntry, HistoryKind};
pub use turn::TurnEngine;
