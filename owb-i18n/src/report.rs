use crate::loader::{DictionaryFile, LanguageMap};
use std::collections::BTreeMap;

/// Phrases that could not be fully translated during a pass
///
/// Keyed by trimmed phrase, then by language field. The value is the best
/// known translation, or an empty string when there is none. Recording the
/// same phrase again replaces its previous entry, so each phrase appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingTranslations(BTreeMap<String, LanguageMap>);

impl MissingTranslations {
    pub fn new() -> Self {
        MissingTranslations(BTreeMap::new())
    }

    pub fn record(&mut self, phrase: &str, language: &str, best_effort: &str) {
        let mut translations = LanguageMap::new();
        translations.insert(language.to_string(), best_effort.to_string());
        self.0.insert(phrase.trim().to_string(), translations);
    }

    pub fn get(&self, phrase: &str) -> Option<&LanguageMap> {
        self.0.get(phrase.trim())
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.0.contains_key(phrase.trim())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Shape the report as a dictionary file with an empty `regex` section,
    /// ready to be reviewed and copied into a real dictionary.
    pub fn to_dump(&self) -> DictionaryFile {
        DictionaryFile {
            direct: self.0.clone(),
            ..DictionaryFile::default()
        }
    }
}
