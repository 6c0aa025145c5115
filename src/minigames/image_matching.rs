//! Minigames domain: image matching, tap the picture of the spoken word.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{Level, VocabularyWord};
use crate::minigames::events::{Feedback, SpeakEvent};

#[derive(Debug, Clone)]
pub struct ImageMatchingSession {
    remaining: Vec<VocabularyWord>,
    target: Option<usize>,
    language: String,
    misses: u32,
    rng: ChaCha8Rng,
}

impl ImageMatchingSession {
    /// Words are spoken in `language`; the first target is picked immediately.
    pub fn new(level: &Level, language: &str, seed: u64) -> Self {
        let mut session = Self {
            remaining: level.words.clone(),
            target: None,
            language: language.to_string(),
            misses: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        session.pick_target();
        session
    }

    pub fn remaining(&self) -> &[VocabularyWord] {
        &self.remaining
    }

    pub fn target(&self) -> Option<&VocabularyWord> {
        self.target.and_then(|index| self.remaining.get(index))
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Prompt for the current target, if any.
    pub fn target_speech(&self) -> Option<SpeakEvent> {
        self.target().map(|word| SpeakEvent {
            text: word.label(&self.language).to_string(),
            language: self.language.clone(),
        })
    }

    pub fn tap(&mut self, word_id: &str) -> Feedback {
        let Some(target) = self.target() else {
            return Feedback::Finished;
        };

        if target.id != word_id {
            self.misses += 1;
            return Feedback::Wrong {
                word_id: word_id.to_string(),
            };
        }

        if let Some(index) = self.target.take() {
            self.remaining.remove(index);
        }
        self.pick_target();

        Feedback::Correct {
            word_id: word_id.to_string(),
        }
    }

    fn pick_target(&mut self) {
        self.target = if self.remaining.is_empty() {
            None
        } else {
            Some(self.rng.random_range(0..self.remaining.len()))
        };
    }
}
