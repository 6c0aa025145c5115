//! Progress domain: completion record for a single level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::content::LevelId;
use crate::progress::stage::GameStage;

/// Which stages of one level the player has finished.
///
/// Stage order is not enforced when completing; `first_incomplete_stage`
/// always answers by the fixed `GameStage::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LevelProgress {
    pub level_id: LevelId,
    pub completed_stages: BTreeSet<GameStage>,
}

impl LevelProgress {
    pub fn new(level_id: LevelId) -> Self {
        Self {
            level_id,
            completed_stages: BTreeSet::new(),
        }
    }

    pub fn is_stage_completed(&self, stage: GameStage) -> bool {
        self.completed_stages.contains(&stage)
    }

    /// Earliest stage, by play order, that has not been completed.
    pub fn first_incomplete_stage(&self) -> Option<GameStage> {
        GameStage::ALL
            .into_iter()
            .find(|stage| !self.completed_stages.contains(stage))
    }

    pub fn is_level_completed(&self) -> bool {
        self.completed_stages.len() == GameStage::ALL.len()
    }

    /// Record a stage as completed. Returns false if it already was.
    pub fn complete_stage(&mut self, stage: GameStage) -> bool {
        self.completed_stages.insert(stage)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_stages.len()
    }
}
