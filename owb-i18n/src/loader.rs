use crate::error::{I18nError, I18nResult};
use crate::store::{parse_json, read_text, to_pretty_json, write_text};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Translations of one phrase or template, keyed by language field (`name_fr`, `name_de`, ...)
pub type LanguageMap = IndexMap<String, String>;

/// A dictionary file as stored on disk
///
/// The JSON file has the following structure:
/// ```json
/// {
///     "direct": { "Sword": { "name_fr": "Épée" } },
///     "regex": { "Level (\\d+) Wizard": { "name_fr": "Assistant niveau $1" } }
/// }
/// ```
///
/// `direct` is held in a `BTreeMap`, so parsing a file already sorts its
/// phrases. `regex` keeps the declared order since rules are tried first to
/// last. Any other top-level key is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryFile {
    #[serde(default)]
    pub direct: BTreeMap<String, LanguageMap>,
    #[serde(default)]
    pub regex: IndexMap<String, LanguageMap>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DictionaryFile {
    /// Load a dictionary file and normalize it on disk
    ///
    /// The file is rewritten with its `direct` phrases in lexicographic order.
    /// Top-level keys keep their order in the file; a missing `direct` or
    /// `regex` section is added at the end. Nothing is written when the file
    /// is already normalized, so loading the same file twice leaves it
    /// untouched the second time.
    ///
    /// # Errors
    /// - File read errors
    /// - Invalid JSON
    /// - File write errors while persisting the normalized form
    pub fn load_normalized(path: &Path) -> I18nResult<Self> {
        let content = read_text(path)?;
        let file: DictionaryFile = parse_json(path, &content)?;
        let layout: Map<String, Value> = parse_json(path, &content)?;

        let normalized = to_pretty_json(path, &file.ordered_like(path, &layout)?)?;
        if normalized != content {
            debug!("Normalizing dictionary {}", path.display());
            write_text(path, &normalized)?;
        }
        Ok(file)
    }

    /// Serialized form with top-level keys in the order of `layout`
    fn ordered_like(
        &self,
        path: &Path,
        layout: &Map<String, Value>,
    ) -> I18nResult<Map<String, Value>> {
        let serialised =
            serde_json::to_value(self).map_err(|source| I18nError::SerialiseJson {
                path: path.to_path_buf(),
                source,
            })?;
        let Value::Object(mut fields) = serialised else {
            return Ok(Map::new());
        };

        let mut ordered = Map::new();
        for key in layout.keys() {
            if let Some(value) = fields.remove(key) {
                ordered.insert(key.clone(), value);
            }
        }
        ordered.extend(fields);
        Ok(ordered)
    }
}
