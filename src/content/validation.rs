//! Validation of the level catalog before it is handed to the game.

use std::collections::HashSet;
use std::fmt;

use super::data::{Level, WORDS_PER_LEVEL};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateLevelId {
        level_id: String,
    },
    WrongWordCount {
        level_id: String,
        count: usize,
    },
    DuplicateWordId {
        level_id: String,
        word_id: String,
    },
    MissingTranslation {
        level_id: String,
        word_id: String,
        language: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLevelId { level_id } => {
                write!(f, "Level '{}' appears more than once", level_id)
            }
            Self::WrongWordCount { level_id, count } => write!(
                f,
                "Level '{}' has {} words, expected {}",
                level_id, count, WORDS_PER_LEVEL
            ),
            Self::DuplicateWordId { level_id, word_id } => {
                write!(f, "Level '{}' repeats word '{}'", level_id, word_id)
            }
            Self::MissingTranslation {
                level_id,
                word_id,
                language,
            } => write!(
                f,
                "Word '{}' in level '{}' has no '{}' translation",
                word_id, level_id, language
            ),
        }
    }
}

/// Validate the ordered level list.
/// Returns a list of validation errors, empty if the catalog is usable.
pub fn validate_levels(levels: &[Level], required_languages: &[String]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_levels = HashSet::new();

    for level in levels {
        let level_id = level.id.to_string();

        if !seen_levels.insert(&level.id) {
            errors.push(ValidationError::DuplicateLevelId {
                level_id: level_id.clone(),
            });
        }

        if level.words.len() != WORDS_PER_LEVEL {
            errors.push(ValidationError::WrongWordCount {
                level_id: level_id.clone(),
                count: level.words.len(),
            });
        }

        let mut seen_words = HashSet::new();
        for word in &level.words {
            if !seen_words.insert(word.id.as_str()) {
                errors.push(ValidationError::DuplicateWordId {
                    level_id: level_id.clone(),
                    word_id: word.id.clone(),
                });
            }

            for language in required_languages {
                if word.translation(language).is_none() {
                    errors.push(ValidationError::MissingTranslation {
                        level_id: level_id.clone(),
                        word_id: word.id.clone(),
                        language: language.clone(),
                    });
                }
            }
        }
    }

    errors
}
