//! Data definitions for the level catalog and app settings.
//!
//! These structs mirror assets/data/*.ron and are used for deserialization.
//! The LevelCatalog provides ordered access and lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Stable identifier of a level. Opaque to the progress core.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Reflect,
)]
#[serde(transparent)]
pub struct LevelId(pub String);

impl LevelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct VocabularyWord {
    pub id: String,
    pub base_word: String,
    pub image_name: String,
    /// Language code -> translation, e.g. {"en": "pencil", "it": "matita"}
    pub translations: HashMap<String, String>,
}

impl VocabularyWord {
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }

    /// Translation in `language`, falling back to the base word.
    pub fn label(&self, language: &str) -> &str {
        self.translation(language).unwrap_or(&self.base_word)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct Level {
    pub id: LevelId,
    pub title: String,
    pub words: Vec<VocabularyWord>,
}

/// Every level ships exactly this many words.
pub const WORDS_PER_LEVEL: usize = 4;

// ============================================================================
// Settings (settings.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppSettings {
    /// Directory holding the progress save.
    pub save_dir: String,
    /// Language the child already speaks; detector labels use it too.
    pub native_language: String,
    /// Language being learned.
    pub target_language: String,
    /// Languages every word must be translated into.
    pub required_languages: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            save_dir: "saves".to_string(),
            native_language: "en".to_string(),
            target_language: "it".to_string(),
            required_languages: vec!["en".to_string(), "es".to_string(), "it".to_string()],
        }
    }
}
