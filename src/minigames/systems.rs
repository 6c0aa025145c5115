//! Minigames domain: session lifecycle, captures, taps, and speech.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::content::LevelCatalog;
use crate::core::{SelectedLanguage, SelectedLevel, SelectedStage};
use crate::minigames::detection::DetectionState;
use crate::minigames::events::{
    CaptureRequestedEvent, CardTappedEvent, Feedback, MinigameFeedbackEvent, SpeakEvent,
};
use crate::minigames::session::{ActiveMinigame, MinigameConfig, MinigameSession};
use crate::progress::StageCompletedEvent;

/// Start a session for the selected level and stage
pub(crate) fn start_session(
    catalog: Res<LevelCatalog>,
    selected_level: Res<SelectedLevel>,
    selected_stage: Res<SelectedStage>,
    language: Res<SelectedLanguage>,
    config: Res<MinigameConfig>,
    mut active: ResMut<ActiveMinigame>,
    mut detection: ResMut<DetectionState>,
    mut speech: MessageWriter<SpeakEvent>,
) {
    let (Some(level), Some(stage)) = (selected_level.level(&catalog), selected_stage.stage) else {
        warn!("Entered play without a selected level and stage");
        return;
    };

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let session = MinigameSession::start(stage, level, &language, seed);

    let prompt = match &session {
        MinigameSession::TreasureHunt(_) => None,
        MinigameSession::MemoryGame(s) => s.target_speech(),
        MinigameSession::InvertedHunt(s) => s.prompt_speech(),
    };
    if let Some(prompt) = prompt {
        speech.write(prompt);
    }

    info!("Started {} for '{}' (seed: {})", stage, level.title, seed);
    detection.clear();
    active.start(level.id.clone(), session);
}

pub(crate) fn end_session(mut active: ResMut<ActiveMinigame>) {
    active.reset();
}

/// Capture button: treasure hunt and inverted hunt look at the detector
pub(crate) fn handle_capture(
    mut captures: MessageReader<CaptureRequestedEvent>,
    detection: Res<DetectionState>,
    mut active: ResMut<ActiveMinigame>,
    mut feedback: MessageWriter<MinigameFeedbackEvent>,
    mut speech: MessageWriter<SpeakEvent>,
) {
    for _ in captures.read() {
        let Some(session) = active.session.as_mut() else {
            continue;
        };
        let stage = session.stage();

        let (result, found) = match session {
            MinigameSession::TreasureHunt(hunt) => {
                let result = hunt.capture(detection.current());
                if let Feedback::Correct { word_id } = &result {
                    if let Some(reveal) = hunt.index_of(word_id).and_then(|i| hunt.speech_for(i)) {
                        speech.write(reveal);
                    }
                }
                (result, hunt.found_count())
            }
            MinigameSession::InvertedHunt(hunt) => {
                let result = hunt.capture(detection.current());
                if let Feedback::Correct { word_id } = &result {
                    for line in [hunt.reveal_speech(word_id), hunt.prompt_speech()]
                        .into_iter()
                        .flatten()
                    {
                        speech.write(line);
                    }
                }
                (result, hunt.found_count())
            }
            MinigameSession::MemoryGame(_) => continue,
        };

        debug!("{} capture: {:?} ({} found)", stage, result, found);
        feedback.write(MinigameFeedbackEvent {
            stage,
            feedback: result,
        });
    }
}

/// Card taps: image matching answers, treasure hunt cards repeat their word
pub(crate) fn handle_card_tap(
    mut taps: MessageReader<CardTappedEvent>,
    mut active: ResMut<ActiveMinigame>,
    mut feedback: MessageWriter<MinigameFeedbackEvent>,
    mut speech: MessageWriter<SpeakEvent>,
) {
    for tap in taps.read() {
        let Some(session) = active.session.as_mut() else {
            continue;
        };

        let stage = session.stage();

        match session {
            MinigameSession::MemoryGame(matching) => {
                let result = matching.tap(&tap.word_id);
                if matches!(result, Feedback::Correct { .. }) {
                    if let Some(prompt) = matching.target_speech() {
                        speech.write(prompt);
                    }
                }
                debug!(
                    "{} tap: {:?} ({} left, {} misses)",
                    stage,
                    result,
                    matching.remaining().len(),
                    matching.misses()
                );
                feedback.write(MinigameFeedbackEvent {
                    stage,
                    feedback: result,
                });
            }
            MinigameSession::TreasureHunt(hunt) => {
                if let Some(line) = hunt.index_of(&tap.word_id).and_then(|i| hunt.speech_for(i)) {
                    speech.write(line);
                }
            }
            MinigameSession::InvertedHunt(_) => {}
        }
    }
}

/// Report the stage once the session's goal is reached
pub(crate) fn report_completion(
    mut active: ResMut<ActiveMinigame>,
    mut completed: MessageWriter<StageCompletedEvent>,
) {
    if active.completion_reported {
        return;
    }
    let (Some(level_id), Some(session)) = (&active.level_id, &active.session) else {
        return;
    };
    if !session.is_complete() {
        return;
    }

    info!("{} finished for '{}'", session.stage(), level_id);
    completed.write(StageCompletedEvent {
        level_id: level_id.clone(),
        stage: session.stage(),
    });
    active.completion_reported = true;
}

/// Speech synthesis lives outside the game; log what would be spoken
pub(crate) fn log_speech(mut events: MessageReader<SpeakEvent>) {
    for event in events.read() {
        info!("Speak [{}]: {}", event.language, event.text);
    }
}
