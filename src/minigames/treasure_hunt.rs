//! Minigames domain: treasure hunt, find the level's objects in any order.

use std::collections::BTreeSet;

use crate::content::{Level, VocabularyWord, find_word_by_label};
use crate::minigames::events::{Feedback, SpeakEvent};

#[derive(Debug, Clone)]
pub struct TreasureHuntSession {
    words: Vec<VocabularyWord>,
    found: BTreeSet<usize>,
    native: String,
    target: String,
}

impl TreasureHuntSession {
    pub fn new(level: &Level, native: &str, target: &str) -> Self {
        Self {
            words: level.words.clone(),
            found: BTreeSet::new(),
            native: native.to_string(),
            target: target.to_string(),
        }
    }

    pub fn is_found(&self, index: usize) -> bool {
        self.found.contains(&index)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }

    /// Capture whatever the detector currently sees. Labels are matched
    /// against the native-language translations.
    pub fn capture(&mut self, detected: Option<&str>) -> Feedback {
        if self.is_complete() {
            return Feedback::Finished;
        }
        let Some(label) = detected else {
            return Feedback::NothingDetected;
        };

        let Some((index, word)) = find_word_by_label(&self.words, label, &self.native) else {
            return Feedback::NotInLevel {
                label: label.to_string(),
            };
        };

        let word_id = word.id.clone();
        if self.found.insert(index) {
            Feedback::Correct { word_id }
        } else {
            Feedback::AlreadyFound { word_id }
        }
    }

    /// Found cards reveal the native word; the rest show the word being learned.
    pub fn card_label(&self, index: usize) -> Option<&str> {
        let word = self.words.get(index)?;
        let language = self.card_language(index);
        Some(word.label(language))
    }

    /// What to say when a card is tapped or revealed.
    pub fn speech_for(&self, index: usize) -> Option<SpeakEvent> {
        let label = self.card_label(index)?;
        Some(SpeakEvent {
            text: label.to_string(),
            language: self.card_language(index).to_string(),
        })
    }

    pub fn index_of(&self, word_id: &str) -> Option<usize> {
        self.words.iter().position(|w| w.id == word_id)
    }

    fn card_language(&self, index: usize) -> &str {
        if self.is_found(index) {
            &self.native
        } else {
            &self.target
        }
    }
}
