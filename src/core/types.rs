//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Axial hex coordinate (q, r system)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32, // Column
    pub r: i32, // Row
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    /// Get all 6 adjacent hexes
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),
            HexCoord::new(self.q + 1, self.r - 1),
            HexCoord::new(self.q, self.r - 1),
            HexCoord::new(self.q - 1, self.r),
            HexCoord::new(self.q - 1, self.r + 1),
            HexCoord::new(self.q, self.r + 1),
        ]
    }

    /// Distance in hex steps using axial coordinate formula
    pub fn distance(&self, other: &HexCoord) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).abs();
        (dq + dr + ds) / 2
    }
}

/// Terrain kinds on the strategic map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Plains,
    Mountains,
    City,
    Coast,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Plains,
        Terrain::Mountains,
        Terrain::City,
        Terrain::Coast,
    ];

    /// Short display label for the CLI renderer
    pub fn label(&self) -> &'static str {
        match self {
            Terrain::Plains => "plains",
            Terrain::Mountains => "mountains",
            Terrain::City => "city",
            Terrain::Coast => "coast",
        }
    }
}

/// Who controls a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Empire,
}

/// The three ways the movement can act on a contested tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Culture,
    Diplomacy,
    Protest,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Culture => "culture",
            ActionKind::Diplomacy => "diplomacy",
            ActionKind::Protest => "protest",
        }
    }
}

/// A unity/pressure/resource adjustment applied to game state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub unity: i32,
    pub pressure: i32,
    pub resources: i32,
}

impl Delta {
    pub fn new(unity: i32, pressure: i32, resources: i32) -> Self {
        Self {
            unity,
            pressure,
            resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_distance_is_symmetric() {
        let a = HexCoord::new(2, -1);
        let b = HexCoord::new(-1, 3);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn origin_neighbors_are_at_distance_one() {
        for n in HexCoord::ORIGIN.neighbors() {
            assert_eq!(HexCoord::ORIGIN.distance(&n), 1);
        }
    }
}
