//! Progress domain: events for stage completion and progress changes.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

use crate::content::LevelId;
use crate::progress::stage::GameStage;
use crate::progress::user::ProgressChange;

/// Event fired when a mini-game session finishes a stage
#[derive(Debug, Clone)]
pub struct StageCompletedEvent {
    pub level_id: LevelId,
    pub stage: GameStage,
}

impl Message for StageCompletedEvent {}

/// Event fired after progress was mutated and saved
#[derive(Debug, Clone)]
pub struct ProgressChangedEvent {
    pub change: ProgressChange,
}

impl Message for ProgressChangedEvent {}

/// Changes collected by the plugin's `UserProgress` subscriber, waiting to be
/// sent as `ProgressChangedEvent`s.
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingProgressChanges(Arc<Mutex<Vec<ProgressChange>>>);

impl PendingProgressChanges {
    pub fn push(&self, change: ProgressChange) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change);
    }

    pub fn drain(&self) -> Vec<ProgressChange> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
