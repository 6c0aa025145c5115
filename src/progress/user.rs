//! Progress domain: the player's progress across all levels.

use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::content::{Level, LevelId};
use crate::progress::level::LevelProgress;
use crate::progress::stage::GameStage;
use crate::progress::store::{ProgressStore, StoreError};

/// Key the whole progress map is saved under.
pub const PROGRESS_KEY: &str = "levelsProgress";

pub type LevelsProgress = BTreeMap<LevelId, LevelProgress>;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to encode progress: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode progress: {0}")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("level index {index} out of range for {len} levels")]
    LevelIndexOutOfRange { index: usize, len: usize },
}

/// What a `mark_stage_completed` call did. Sent to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressChange {
    pub level_id: LevelId,
    pub stage: GameStage,
    /// False when the stage had already been completed.
    pub newly_completed: bool,
    pub level_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ProgressChange) + Send + Sync>;

/// Single source of truth for level and stage unlocks.
///
/// Loads from its store on construction and saves after every mutation.
/// Save and load failures are logged, never propagated.
#[derive(Resource)]
pub struct UserProgress {
    levels_progress: LevelsProgress,
    store: Box<dyn ProgressStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for UserProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProgress")
            .field("levels_progress", &self.levels_progress)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl UserProgress {
    pub fn new(store: impl ProgressStore + 'static) -> Self {
        let mut progress = Self {
            levels_progress: LevelsProgress::new(),
            store: Box::new(store),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        progress.load();
        progress
    }

    pub fn levels_progress(&self) -> &LevelsProgress {
        &self.levels_progress
    }

    /// Progress for `level_id`, or an empty record if none exists.
    /// Never inserts into the map.
    pub fn progress_for(&self, level_id: &LevelId) -> LevelProgress {
        self.levels_progress
            .get(level_id)
            .cloned()
            .unwrap_or_else(|| LevelProgress::new(level_id.clone()))
    }

    // ------------------------------------------------------------------------
    // Unlock queries
    // ------------------------------------------------------------------------

    /// Level 0 is always unlocked; any later level unlocks once the one
    /// before it has all stages completed.
    pub fn check_level_unlocked(
        &self,
        level_index: usize,
        levels: &[Level],
    ) -> Result<bool, ProgressError> {
        if level_index >= levels.len() {
            return Err(ProgressError::LevelIndexOutOfRange {
                index: level_index,
                len: levels.len(),
            });
        }

        if level_index == 0 {
            return Ok(true);
        }

        let previous = &levels[level_index - 1].id;
        Ok(self
            .levels_progress
            .get(previous)
            .is_some_and(LevelProgress::is_level_completed))
    }

    /// Like `check_level_unlocked`, but an out-of-range index counts as locked.
    pub fn is_level_unlocked(&self, level_index: usize, levels: &[Level]) -> bool {
        self.check_level_unlocked(level_index, levels)
            .unwrap_or_else(|e| {
                warn!("{}; treating level as locked", e);
                false
            })
    }

    /// True only for the exact next stage to play.
    pub fn is_stage_unlocked(&self, stage: GameStage, level: &Level) -> bool {
        self.progress_for(&level.id).first_incomplete_stage() == Some(stage)
    }

    /// True for completed stages (replay) and the next stage to play.
    pub fn is_stage_enabled(&self, stage: GameStage, level: &Level) -> bool {
        let progress = self.progress_for(&level.id);
        progress.is_stage_completed(stage) || progress.first_incomplete_stage() == Some(stage)
    }

    pub fn completed_level_count(&self, levels: &[Level]) -> usize {
        levels
            .iter()
            .filter(|level| {
                self.levels_progress
                    .get(&level.id)
                    .is_some_and(LevelProgress::is_level_completed)
            })
            .count()
    }

    /// First level that is unlocked but not yet completed.
    pub fn next_playable_level(&self, levels: &[Level]) -> Option<usize> {
        (0..levels.len()).find(|&index| {
            self.is_level_unlocked(index, levels)
                && !self.progress_for(&levels[index].id).is_level_completed()
        })
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Completes `stage` for `level`, saves, and notifies subscribers.
    /// Completing an already completed stage changes nothing but still notifies.
    pub fn mark_stage_completed(&mut self, stage: GameStage, level: &Level) -> ProgressChange {
        let mut progress = self.progress_for(&level.id);
        let newly_completed = progress.complete_stage(stage);
        let level_completed = progress.is_level_completed();
        self.levels_progress.insert(level.id.clone(), progress);

        self.save();

        let change = ProgressChange {
            level_id: level.id.clone(),
            stage,
            newly_completed,
            level_completed,
        };
        self.notify(&change);
        change
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ProgressChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: &ProgressChange) {
        for (_, callback) in &mut self.subscribers {
            callback(change);
        }
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    pub fn try_save(&mut self) -> Result<(), ProgressError> {
        let bytes = serde_json::to_vec(&self.levels_progress).map_err(ProgressError::Encode)?;
        self.store.write(PROGRESS_KEY, &bytes)?;
        Ok(())
    }

    /// Best effort: a failed save is logged and gameplay continues.
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            warn!("Progress not saved: {}", e);
        }
    }

    /// Reads the saved map, or `None` if nothing has been saved yet.
    pub fn try_load(&self) -> Result<Option<LevelsProgress>, ProgressError> {
        let Some(bytes) = self.store.read(PROGRESS_KEY)? else {
            return Ok(None);
        };

        let decoded: LevelsProgress =
            serde_json::from_slice(&bytes).map_err(ProgressError::Decode)?;

        // The map key is authoritative for a record's level id.
        let repaired: LevelsProgress = decoded
            .into_iter()
            .map(|(level_id, mut progress)| {
                progress.level_id = level_id.clone();
                (level_id, progress)
            })
            .collect();

        Ok(Some(repaired))
    }

    /// Replaces in-memory progress with the saved map. Missing or corrupt
    /// data leaves progress empty.
    pub fn load(&mut self) {
        self.levels_progress = match self.try_load() {
            Ok(Some(levels_progress)) => {
                info!("Loaded progress for {} levels", levels_progress.len());
                levels_progress
            }
            Ok(None) => {
                debug!("No saved progress, starting fresh");
                LevelsProgress::new()
            }
            Err(e) => {
                warn!("{}; starting with empty progress", e);
                LevelsProgress::new()
            }
        };
    }
}
