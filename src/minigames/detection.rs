//! Minigames domain: latest label reported by the object detector.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::minigames::events::DetectedLabelEvent;

/// Label the detector uses when it recognises nothing.
pub const NO_DETECTION: &str = "none";

#[derive(Resource, Debug, Default)]
pub struct DetectionState {
    current: Option<String>,
}

impl DetectionState {
    pub fn update(&mut self, label: &str) {
        let label = label.trim();
        self.current = if label.is_empty() || label.eq_ignore_ascii_case(NO_DETECTION) {
            None
        } else {
            Some(label.to_string())
        };
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

pub(crate) fn track_detected_labels(
    mut events: MessageReader<DetectedLabelEvent>,
    mut detection: ResMut<DetectionState>,
) {
    // Only the most recent frame matters
    if let Some(event) = events.read().last() {
        detection.update(&event.label);
    }
}
