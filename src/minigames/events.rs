//! Minigames domain: input from the detector and UI, output to speech.

use bevy::ecs::message::Message;

use crate::progress::GameStage;

/// Event fired by the object detector for every classified frame.
/// `"none"` (or an empty label) means nothing was recognised.
#[derive(Debug, Clone)]
pub struct DetectedLabelEvent {
    pub label: String,
}

impl Message for DetectedLabelEvent {}

/// Event fired when the player presses the capture button
#[derive(Debug)]
pub struct CaptureRequestedEvent;

impl Message for CaptureRequestedEvent {}

/// Event fired when the player taps a word card
#[derive(Debug)]
pub struct CardTappedEvent {
    pub word_id: String,
}

impl Message for CardTappedEvent {}

/// Request for the speech collaborator to pronounce `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakEvent {
    pub text: String,
    /// Language code, e.g. "it"
    pub language: String,
}

impl Message for SpeakEvent {}

/// Result of one capture or tap, for the UI to animate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Detector saw nothing when the capture was requested
    NothingDetected,
    /// Detected object is not one of this level's words
    NotInLevel { label: String },
    /// Detected object belongs to the level but is not the one asked for
    WrongObject { label: String },
    /// Word found (treasure hunt, inverted hunt) or matched (image matching)
    Correct { word_id: String },
    /// Word was already found earlier in this session
    AlreadyFound { word_id: String },
    /// Tapped card is not the spoken word
    Wrong { word_id: String },
    /// Input arrived after the session was complete
    Finished,
}

#[derive(Debug, Clone)]
pub struct MinigameFeedbackEvent {
    pub stage: GameStage,
    pub feedback: Feedback,
}

impl Message for MinigameFeedbackEvent {}
