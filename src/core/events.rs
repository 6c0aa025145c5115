//! Core domain: events for level, stage, and language selection.

use bevy::ecs::message::Message;

use crate::progress::GameStage;

/// Event fired when the player taps a level on the level map
#[derive(Debug)]
pub struct LevelSelectedEvent {
    pub index: usize,
}

impl Message for LevelSelectedEvent {}

/// Event fired when the player picks a mini-game for the selected level
#[derive(Debug)]
pub struct StageSelectedEvent {
    pub stage: GameStage,
}

impl Message for StageSelectedEvent {}

/// Event fired when the player changes the language being learned
#[derive(Debug)]
pub struct LanguageSelectedEvent {
    pub code: String,
}

impl Message for LanguageSelectedEvent {}

/// Event fired when the player backs out of the current screen
#[derive(Debug)]
pub struct NavigateBackEvent;

impl Message for NavigateBackEvent {}
