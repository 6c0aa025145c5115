//! Progress domain: the three mini-game stages of a level.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mini-games in play order. The derived `Ord` follows declaration order,
/// which is the order stages unlock in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Reflect,
)]
pub enum GameStage {
    TreasureHunt,
    MemoryGame,
    InvertedHunt,
}

impl GameStage {
    pub const ALL: [GameStage; 3] = [
        GameStage::TreasureHunt,
        GameStage::MemoryGame,
        GameStage::InvertedHunt,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            GameStage::TreasureHunt => "Treasure Hunt",
            GameStage::MemoryGame => "Image Matching",
            GameStage::InvertedHunt => "Inverted Hunt",
        }
    }
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
