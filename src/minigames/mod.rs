//! Minigames domain: treasure hunt, image matching, and inverted hunt sessions.
//!
//! Camera frames and speech synthesis stay outside the game. Sessions consume
//! `DetectedLabelEvent`s from the object detector and emit `SpeakEvent`s.

mod detection;
mod events;
mod image_matching;
mod inverted_hunt;
mod session;
mod systems;
#[cfg(test)]
mod tests;
mod treasure_hunt;

pub use detection::{DetectionState, NO_DETECTION};
pub use events::{
    CaptureRequestedEvent, CardTappedEvent, DetectedLabelEvent, Feedback, MinigameFeedbackEvent,
    SpeakEvent,
};
pub use image_matching::ImageMatchingSession;
pub use inverted_hunt::InvertedHuntSession;
pub use session::{ActiveMinigame, MinigameConfig, MinigameSession};
pub use treasure_hunt::TreasureHuntSession;

use bevy::prelude::*;

use crate::core::AppState;
use crate::minigames::detection::track_detected_labels;
use crate::minigames::systems::{
    end_session, handle_capture, handle_card_tap, log_speech, report_completion, start_session,
};

#[derive(Default)]
pub struct MinigamesPlugin {
    /// Fixed seed for target picking and shuffles
    pub seed: Option<u64>,
}

impl Plugin for MinigamesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveMinigame>()
            .init_resource::<DetectionState>()
            .insert_resource(MinigameConfig { seed: self.seed })
            .add_message::<DetectedLabelEvent>()
            .add_message::<CaptureRequestedEvent>()
            .add_message::<CardTappedEvent>()
            .add_message::<SpeakEvent>()
            .add_message::<MinigameFeedbackEvent>()
            .add_systems(OnEnter(AppState::Playing), start_session)
            .add_systems(OnExit(AppState::Playing), end_session)
            .add_systems(Update, (track_detected_labels, log_speech))
            .add_systems(
                Update,
                (handle_capture, handle_card_tap, report_completion)
                    .chain()
                    .after(track_detected_labels)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}
