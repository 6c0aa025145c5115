//! Core domain: app state definitions for the play flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum AppState {
    #[default]
    Boot,
    LevelSelect,
    StageSelect,
    Playing,
    LevelComplete,
}
