//! Progress domain: systems applying stage completions.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::LevelCatalog;
use crate::progress::events::{
    PendingProgressChanges, ProgressChangedEvent, StageCompletedEvent,
};
use crate::progress::stage::GameStage;
use crate::progress::user::UserProgress;

/// Apply completed stages to the player's progress.
pub(crate) fn record_completed_stages(
    mut completed: MessageReader<StageCompletedEvent>,
    catalog: Res<LevelCatalog>,
    mut progress: ResMut<UserProgress>,
) {
    for event in completed.read() {
        let Some(level) = catalog.get(&event.level_id) else {
            warn!(
                "Stage '{}' completed for unknown level '{}'",
                event.stage, event.level_id
            );
            continue;
        };

        let change = progress.mark_stage_completed(event.stage, level);
        info!(
            "{} completed in '{}' ({}/{} stages, new: {})",
            event.stage,
            level.title,
            progress.progress_for(&level.id).completed_count(),
            GameStage::ALL.len(),
            change.newly_completed
        );
    }
}

/// Send the changes the progress subscriber has collected since last frame.
pub(crate) fn publish_progress_changes(
    pending: Res<PendingProgressChanges>,
    mut changed: MessageWriter<ProgressChangedEvent>,
) {
    for change in pending.drain() {
        changed.write(ProgressChangedEvent { change });
    }
}

pub(crate) fn log_progress_summary(catalog: Res<LevelCatalog>, progress: Res<UserProgress>) {
    let levels = catalog.levels();
    info!(
        "Progress: {}/{} levels completed, next playable: {:?}",
        progress.completed_level_count(levels),
        levels.len(),
        progress
            .next_playable_level(levels)
            .and_then(|index| levels.get(index))
            .map(|level| level.title.as_str())
    );
}
