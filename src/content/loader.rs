//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::{AppSettings, DataFile, Level};

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: path.display().to_string(),
        source,
    })
}

/// Parse a DataFile<Level> from RON text. Level order in the file is the play order.
pub fn parse_levels(contents: &str, file: &str) -> Result<Vec<Level>, ContentLoadError> {
    let data: DataFile<Level> =
        ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;

    Ok(data.items)
}

/// Load the ordered level list from levels.ron.
pub fn load_levels(path: &Path) -> Result<Vec<Level>, ContentLoadError> {
    let contents = read_file(path)?;
    parse_levels(&contents, &path.display().to_string())
}

/// Load settings.ron (a single struct, not wrapped in DataFile).
pub fn load_settings(path: &Path) -> Result<AppSettings, ContentLoadError> {
    let contents = read_file(path)?;
    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError::Parse {
            file: path.display().to_string(),
            message: e.to_string(),
        })
}
