use crate::error::{I18nError, I18nResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON file into `T`
///
/// # Errors
/// - File read errors
/// - Invalid JSON, or JSON not matching `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> I18nResult<T> {
    let content = read_text(path)?;
    parse_json(path, &content)
}

pub(crate) fn read_text(path: &Path) -> I18nResult<String> {
    fs::read_to_string(path).map_err(|source| I18nError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_json<T: DeserializeOwned>(path: &Path, content: &str) -> I18nResult<T> {
    serde_json::from_str(content).map_err(|source| I18nError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a value the way every file of the project is stored: two-space
/// indentation, non-ASCII characters kept as-is, and a trailing newline.
pub fn to_pretty_json<T: Serialize>(path: &Path, value: &T) -> I18nResult<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| {
        I18nError::SerialiseJson {
            path: path.to_path_buf(),
            source,
        }
    })?;
    text.push('\n');
    Ok(text)
}

/// Write `value` to `path` as pretty JSON, replacing any previous content
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> I18nResult<()> {
    let text = to_pretty_json(path, value)?;
    write_text(path, &text)
}

pub(crate) fn write_text(path: &Path, text: &str) -> I18nResult<()> {
    fs::write(path, text).map_err(|source| I18nError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
