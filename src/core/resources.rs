//! Core domain: selection resources shared by the play flow.

use bevy::prelude::*;

use crate::content::{AppSettings, Level, LevelCatalog};
use crate::progress::GameStage;

/// Level the player is currently in, by catalog position
#[derive(Resource, Debug, Default)]
pub struct SelectedLevel {
    pub index: Option<usize>,
}

impl SelectedLevel {
    pub fn select(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn level<'a>(&self, catalog: &'a LevelCatalog) -> Option<&'a Level> {
        self.index.and_then(|index| catalog.get_index(index))
    }
}

/// Stage being played in the selected level
#[derive(Resource, Debug, Default)]
pub struct SelectedStage {
    pub stage: Option<GameStage>,
}

/// Language pair used for labels and speech
#[derive(Resource, Debug, Clone)]
pub struct SelectedLanguage {
    /// Language being learned
    pub target: String,
    /// Language the child already speaks
    pub native: String,
}

impl SelectedLanguage {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            target: settings.target_language.clone(),
            native: settings.native_language.clone(),
        }
    }
}

impl Default for SelectedLanguage {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}
