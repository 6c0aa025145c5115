//! Minigames domain: inverted hunt, find each spoken word's object in turn.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::content::{Level, VocabularyWord, find_word_by_label, labels_match};
use crate::minigames::events::{Feedback, SpeakEvent};

#[derive(Debug, Clone)]
pub struct InvertedHuntSession {
    order: Vec<VocabularyWord>,
    current: usize,
    native: String,
    target: String,
}

impl InvertedHuntSession {
    /// Words are asked for in a shuffled order fixed by `seed`.
    pub fn new(level: &Level, native: &str, target: &str, seed: u64) -> Self {
        let mut order = level.words.clone();
        order.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        Self {
            order,
            current: 0,
            native: native.to_string(),
            target: target.to_string(),
        }
    }

    pub fn current_word(&self) -> Option<&VocabularyWord> {
        self.order.get(self.current)
    }

    pub fn found_count(&self) -> usize {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.order.len()
    }

    /// Whether the detector is looking at the object being asked for.
    pub fn is_target_in_view(&self, detected: Option<&str>) -> bool {
        match (self.current_word(), detected) {
            (Some(word), Some(label)) => word
                .translation(&self.native)
                .is_some_and(|t| labels_match(t, label)),
            _ => false,
        }
    }

    /// Ask for the current word in the language being learned.
    pub fn prompt_speech(&self) -> Option<SpeakEvent> {
        self.current_word().map(|word| SpeakEvent {
            text: word.label(&self.target).to_string(),
            language: self.target.clone(),
        })
    }

    pub fn capture(&mut self, detected: Option<&str>) -> Feedback {
        let Some(word) = self.current_word() else {
            return Feedback::Finished;
        };
        let Some(label) = detected else {
            return Feedback::NothingDetected;
        };

        if self.is_target_in_view(Some(label)) {
            let word_id = word.id.clone();
            self.current += 1;
            return Feedback::Correct { word_id };
        }

        if find_word_by_label(&self.order, label, &self.native).is_some() {
            Feedback::WrongObject {
                label: label.to_string(),
            }
        } else {
            Feedback::NotInLevel {
                label: label.to_string(),
            }
        }
    }

    /// Reveal speech for a word just found, in the native language.
    pub fn reveal_speech(&self, word_id: &str) -> Option<SpeakEvent> {
        let word = self.order.iter().find(|w| w.id == word_id)?;
        Some(SpeakEvent {
            text: word.label(&self.native).to_string(),
            language: self.native.clone(),
        })
    }
}
