//! LevelCatalog resource providing ordered access to the loaded levels.

use bevy::prelude::*;

use super::data::{Level, LevelId, VocabularyWord};

/// Ordered catalog of levels. Position in the list is play order;
/// the progress core only refers to levels by id and position.
#[derive(Resource, Debug, Default, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, id: &LevelId) -> Option<&Level> {
        self.levels.iter().find(|level| &level.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Returns a summary of loaded content for logging.
    pub fn summary(&self) -> String {
        let titles: Vec<&str> = self.levels.iter().map(|l| l.title.as_str()).collect();
        format!(
            "LevelCatalog loaded: {} levels ({})",
            self.levels.len(),
            titles.join(", ")
        )
    }
}

/// Whether a translation and a detector label name the same object.
/// Ignores surrounding whitespace and case, including non-ASCII letters.
pub fn labels_match(translation: &str, label: &str) -> bool {
    translation.trim().to_lowercase() == label.trim().to_lowercase()
}

/// Finds the word whose translation in `language` matches a detector label.
pub fn find_word_by_label<'a>(
    words: &'a [VocabularyWord],
    label: &str,
    language: &str,
) -> Option<(usize, &'a VocabularyWord)> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    words.iter().enumerate().find(|(_, word)| {
        word.translation(language)
            .is_some_and(|t| labels_match(t, label))
    })
}
