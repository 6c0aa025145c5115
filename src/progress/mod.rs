//! Progress domain: stage completion, level unlocks, and the save.

mod events;
mod level;
mod stage;
mod store;
mod systems;
mod user;

pub use events::{PendingProgressChanges, ProgressChangedEvent, StageCompletedEvent};
pub use level::LevelProgress;
pub use stage::GameStage;
pub use store::{FileStore, MemoryStore, ProgressStore, StoreError};
pub use user::{
    LevelsProgress, PROGRESS_KEY, ProgressChange, ProgressError, SubscriptionId, UserProgress,
};

use bevy::prelude::*;

use crate::content::AppSettings;
use crate::progress::systems::{
    log_progress_summary, publish_progress_changes, record_completed_stages,
};

/// Where the plugin's `UserProgress` keeps its save.
#[derive(Debug, Clone, Default)]
pub enum SaveBackend {
    /// `FileStore` in `AppSettings::save_dir`.
    #[default]
    FromSettings,
    Memory(MemoryStore),
}

#[derive(Default)]
pub struct ProgressPlugin {
    pub backend: SaveBackend,
}

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        let mut progress = match &self.backend {
            SaveBackend::FromSettings => {
                let save_dir = app
                    .world()
                    .get_resource::<AppSettings>()
                    .map(|settings| settings.save_dir.clone())
                    .unwrap_or_else(|| AppSettings::default().save_dir);
                info!("Progress saves to {}", save_dir);
                UserProgress::new(FileStore::new(save_dir))
            }
            SaveBackend::Memory(store) => UserProgress::new(store.clone()),
        };

        // Every mutation, whoever makes it, is re-sent as a ProgressChangedEvent
        let pending = PendingProgressChanges::default();
        let sink = pending.clone();
        progress.subscribe(move |change| sink.push(change.clone()));

        app.register_type::<GameStage>()
            .insert_resource(progress)
            .insert_resource(pending)
            .add_message::<StageCompletedEvent>()
            .add_message::<ProgressChangedEvent>()
            .add_systems(Startup, log_progress_summary)
            .add_systems(
                Update,
                (record_completed_stages, publish_progress_changes).chain(),
            );
    }
}
