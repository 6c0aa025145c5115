//! Minigames domain: the session being played and its configuration.

use bevy::prelude::*;

use crate::content::{Level, LevelId};
use crate::core::SelectedLanguage;
use crate::minigames::image_matching::ImageMatchingSession;
use crate::minigames::inverted_hunt::InvertedHuntSession;
use crate::minigames::treasure_hunt::TreasureHuntSession;
use crate::progress::GameStage;

#[derive(Debug, Clone)]
pub enum MinigameSession {
    TreasureHunt(TreasureHuntSession),
    MemoryGame(ImageMatchingSession),
    InvertedHunt(InvertedHuntSession),
}

impl MinigameSession {
    pub fn start(stage: GameStage, level: &Level, language: &SelectedLanguage, seed: u64) -> Self {
        match stage {
            GameStage::TreasureHunt => MinigameSession::TreasureHunt(TreasureHuntSession::new(
                level,
                &language.native,
                &language.target,
            )),
            GameStage::MemoryGame => {
                MinigameSession::MemoryGame(ImageMatchingSession::new(level, &language.native, seed))
            }
            GameStage::InvertedHunt => MinigameSession::InvertedHunt(InvertedHuntSession::new(
                level,
                &language.native,
                &language.target,
                seed,
            )),
        }
    }

    pub fn stage(&self) -> GameStage {
        match self {
            MinigameSession::TreasureHunt(_) => GameStage::TreasureHunt,
            MinigameSession::MemoryGame(_) => GameStage::MemoryGame,
            MinigameSession::InvertedHunt(_) => GameStage::InvertedHunt,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            MinigameSession::TreasureHunt(session) => session.is_complete(),
            MinigameSession::MemoryGame(session) => session.is_complete(),
            MinigameSession::InvertedHunt(session) => session.is_complete(),
        }
    }
}

/// Session for the stage currently being played
#[derive(Resource, Debug, Default)]
pub struct ActiveMinigame {
    pub level_id: Option<LevelId>,
    pub session: Option<MinigameSession>,
    /// Set once the stage completion has been sent, so it is sent only once
    pub completion_reported: bool,
}

impl ActiveMinigame {
    pub fn start(&mut self, level_id: LevelId, session: MinigameSession) {
        self.level_id = Some(level_id);
        self.session = Some(session);
        self.completion_reported = false;
    }

    pub fn reset(&mut self) {
        self.level_id = None;
        self.session = None;
        self.completion_reported = false;
    }
}

/// Fixes the shuffle/target seed; `None` draws a fresh seed per session
#[derive(Resource, Debug, Default)]
pub struct MinigameConfig {
    pub seed: Option<u64>,
}
