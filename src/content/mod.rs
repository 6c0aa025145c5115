//! Content domain: level catalog, vocabulary, and app settings.

mod builtin;
mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use builtin::builtin_levels;
pub use data::{AppSettings, Level, LevelId, VocabularyWord, WORDS_PER_LEVEL};
pub use loader::{ContentLoadError, load_levels, load_settings, parse_levels};
pub use registry::{LevelCatalog, find_word_by_label, labels_match};
pub use validation::{ValidationError, validate_levels};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

/// Where the RON data files live.
pub const DATA_DIR: &str = "assets/data";

/// Environment variable overriding `AppSettings::save_dir`.
pub const SAVE_DIR_ENV: &str = "BLINKO_SAVE_DIR";

pub struct ContentPlugin {
    pub data_dir: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LevelId>()
            .register_type::<VocabularyWord>()
            .register_type::<Level>();

        // Inserted at build time; later plugins read AppSettings in build().
        let settings = settings_from_dir(&self.data_dir);
        let catalog = catalog_from_dir(&self.data_dir, &settings.required_languages);
        info!("{}", catalog.summary());

        app.insert_resource(settings).insert_resource(catalog);
    }
}

fn settings_from_dir(data_dir: &Path) -> AppSettings {
    let path = data_dir.join("settings.ron");
    let mut settings = if path.exists() {
        match load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}; using default settings", e);
                AppSettings::default()
            }
        }
    } else {
        AppSettings::default()
    };

    if let Ok(dir) = std::env::var(SAVE_DIR_ENV) {
        settings.save_dir = dir;
    }

    settings
}

fn catalog_from_dir(data_dir: &Path, required_languages: &[String]) -> LevelCatalog {
    let path = data_dir.join("levels.ron");
    let levels = if path.exists() {
        match load_levels(&path) {
            Ok(levels) => levels,
            Err(e) => {
                error!("{}; falling back to builtin levels", e);
                builtin_levels()
            }
        }
    } else {
        debug!("No levels file at {:?}, using builtin levels", path);
        builtin_levels()
    };

    let errors = validate_levels(&levels, required_languages);
    if errors.is_empty() {
        return LevelCatalog::new(levels);
    }

    for e in &errors {
        error!("Content validation: {}", e);
    }
    LevelCatalog::new(builtin_levels())
}
