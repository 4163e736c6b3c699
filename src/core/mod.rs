pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use types::{ActionKind, Delta, Faction, HexCoord, Terrain};
