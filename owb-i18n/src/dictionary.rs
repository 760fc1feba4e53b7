//! In-memory translation dictionary
//!
//! A [`TranslationDictionary`] is compiled from a [`DictionaryFile`]: direct
//! phrases are trimmed, and regex rules are compiled once into an ordered list
//! so that the first matching rule always wins in declared order.

use crate::error::{I18nError, I18nResult};
use crate::loader::{DictionaryFile, LanguageMap};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::Path;

/// A pattern-based dictionary entry, for phrases carrying numbers or other
/// varying content (e.g. `"Level (\d+) Wizard"`)
#[derive(Debug, Clone)]
pub struct RegexRule {
    pattern: String,
    regex: Regex,
    templates: LanguageMap,
}

impl RegexRule {
    /// Compile a rule. The pattern must match a whole phrase to apply.
    pub fn new(pattern: &str, templates: LanguageMap) -> I18nResult<Self> {
        let regex =
            Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
                I18nError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }
            })?;
        Ok(RegexRule {
            pattern: pattern.to_string(),
            regex,
            templates,
        })
    }

    /// The pattern as written in the dictionary
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The template for `language`, with `$1`, `$2`, ... placeholders
    pub fn template(&self, language: &str) -> Option<&str> {
        self.templates.get(language).map(String::as_str)
    }

    /// Capture groups of `text` if the rule matches it entirely
    pub fn full_match<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationDictionary {
    // Keyed by trimmed English phrase and then by language field
    // e.g. direct["Sword"]["name_fr"] = "Épée"
    direct: HashMap<String, LanguageMap>,
    regex: Vec<RegexRule>,
}

impl TranslationDictionary {
    pub fn new() -> Self {
        TranslationDictionary::default()
    }

    /// Compile a dictionary from its stored form
    ///
    /// # Errors
    /// Returns [`I18nError::InvalidPattern`] for the first regex rule that
    /// does not compile.
    pub fn compile(file: &DictionaryFile) -> I18nResult<Self> {
        let direct = file
            .direct
            .iter()
            .map(|(phrase, translations)| (phrase.trim().to_string(), translations.clone()))
            .collect();
        let regex = file
            .regex
            .iter()
            .map(|(pattern, templates)| RegexRule::new(pattern, templates.clone()))
            .collect::<I18nResult<Vec<_>>>()?;
        Ok(TranslationDictionary { direct, regex })
    }

    /// Load, normalize and compile a dictionary file
    pub fn load(path: &Path) -> I18nResult<Self> {
        let file = DictionaryFile::load_normalized(path)?;
        Self::compile(&file)
    }

    pub fn with_direct(&mut self, phrase: &str, language: &str, translation: &str) -> &mut Self {
        self.direct
            .entry(phrase.trim().to_string())
            .or_default()
            .insert(language.to_string(), translation.to_string());
        self
    }

    /// Add a regex rule template, or set the template of an existing rule
    pub fn with_regex(
        &mut self,
        pattern: &str,
        language: &str,
        template: &str,
    ) -> I18nResult<&mut Self> {
        if let Some(rule) = self.regex.iter_mut().find(|rule| rule.pattern == pattern) {
            rule.templates
                .insert(language.to_string(), template.to_string());
        } else {
            let mut templates = LanguageMap::new();
            templates.insert(language.to_string(), template.to_string());
            self.regex.push(RegexRule::new(pattern, templates)?);
        }
        Ok(self)
    }

    /// Direct entry for a phrase, compared trimmed
    pub fn direct_entry(&self, phrase: &str) -> Option<&LanguageMap> {
        self.direct.get(phrase.trim())
    }

    /// Regex rules in the order they are tried
    pub fn regex_rules(&self) -> &[RegexRule] {
        &self.regex
    }

    pub fn direct_len(&self) -> usize {
        self.direct.len()
    }

    pub fn regex_len(&self) -> usize {
        self.regex.len()
    }

    /// Merge a per-file override dictionary over a common one
    ///
    /// Entries of `overrides` replace entries of `common` with the same
    /// phrase or pattern. Override rules are tried first, followed by the
    /// common rules they do not replace, each group in declared order.
    pub fn merged(common: &TranslationDictionary, overrides: &TranslationDictionary) -> Self {
        let mut direct = common.direct.clone();
        for (phrase, translations) in &overrides.direct {
            direct.insert(phrase.clone(), translations.clone());
        }

        let mut regex = overrides.regex.clone();
        regex.extend(
            common
                .regex
                .iter()
                .filter(|rule| !overrides.regex.iter().any(|o| o.pattern == rule.pattern))
                .cloned(),
        );

        TranslationDictionary { direct, regex }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french(text: &str) -> LanguageMap {
        let mut map = LanguageMap::new();
        map.insert("name_fr".to_string(), text.to_string());
        map
    }

    #[test]
    fn test_compile_trims_direct_phrases() {
        let mut file = DictionaryFile::default();
        file.direct.insert(" Sword ".to_string(), french("Épée"));

        let dictionary = TranslationDictionary::compile(&file).unwrap();
        assert!(dictionary.direct_entry("Sword").is_some());
        assert!(dictionary.direct_entry("  Sword\t").is_some());
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        let mut file = DictionaryFile::default();
        file.regex.insert("Level (\\d+ Wizard".to_string(), french("Assistant"));

        let err = TranslationDictionary::compile(&file).unwrap_err();
        assert!(matches!(err, I18nError::InvalidPattern { .. }));
        assert!(err.to_string().contains("Level (\\d+ Wizard"));
    }

    #[test]
    fn test_regex_rule_requires_full_match() {
        let rule = RegexRule::new(r"Level (\d+) Wizard", french("Assistant niveau $1")).unwrap();
        assert!(rule.full_match("Level 4 Wizard").is_some());
        assert!(rule.full_match("Level 4 Wizard Lord").is_none());
        assert!(rule.full_match("A Level 4 Wizard").is_none());
    }

    #[test]
    fn test_regex_rule_alternation_is_anchored_as_a_whole() {
        let rule = RegexRule::new("Sword|Shield", french("Arme")).unwrap();
        assert!(rule.full_match("Shield").is_some());
        assert!(rule.full_match("Sword and Shield").is_none());
    }

    #[test]
    fn test_merge_override_wins() {
        let mut common = TranslationDictionary::new();
        common.with_direct("Sword", "name_fr", "Épée");
        common.with_direct("Bow", "name_fr", "Arc");
        let mut overrides = TranslationDictionary::new();
        overrides.with_direct("Sword", "name_fr", "Lame");

        let merged = TranslationDictionary::merged(&common, &overrides);
        assert_eq!(
            merged.direct_entry("Sword").unwrap().get("name_fr").unwrap(),
            "Lame"
        );
        assert_eq!(
            merged.direct_entry("Bow").unwrap().get("name_fr").unwrap(),
            "Arc"
        );
        assert_eq!(merged.direct_len(), 2);
    }

    #[test]
    fn test_merge_regex_order_and_precedence() {
        let mut common = TranslationDictionary::new();
        common.with_regex("(.*) Champion", "name_fr", "Champion $1").unwrap();
        common.with_regex(r"Level (\d+) Wizard", "name_fr", "Assistant niveau $1").unwrap();
        let mut overrides = TranslationDictionary::new();
        overrides.with_regex(r"(\d+) Knights", "name_fr", "$1 Chevaliers").unwrap();
        overrides.with_regex("(.*) Champion", "name_fr", "Héros $1").unwrap();

        let merged = TranslationDictionary::merged(&common, &overrides);
        let patterns: Vec<&str> = merged.regex_rules().iter().map(RegexRule::pattern).collect();
        assert_eq!(
            patterns,
            vec![r"(\d+) Knights", "(.*) Champion", r"Level (\d+) Wizard"]
        );
        assert_eq!(merged.regex_rules()[1].template("name_fr"), Some("Héros $1"));
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let mut common = TranslationDictionary::new();
        common.with_direct("Sword", "name_fr", "Épée");
        let mut overrides = TranslationDictionary::new();
        overrides.with_direct("Sword", "name_fr", "Lame");

        let _ = TranslationDictionary::merged(&common, &overrides);
        assert_eq!(
            common.direct_entry("Sword").unwrap().get("name_fr").unwrap(),
            "Épée"
        );
    }

    #[test]
    fn test_with_regex_updates_existing_rule() {
        let mut dictionary = TranslationDictionary::new();
        dictionary.with_regex("(.*) Champion", "name_fr", "Champion $1").unwrap();
        dictionary.with_regex("(.*) Champion", "name_de", "Champion $1").unwrap();

        assert_eq!(dictionary.regex_len(), 1);
        assert_eq!(dictionary.regex_rules()[0].template("name_de"), Some("Champion $1"));
    }
}
