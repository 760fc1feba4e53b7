//! Recursive phrase resolution
//!
//! The [`Resolver`] rebuilds the translation of an English phrase from the
//! dictionary, reusing the prior translation wherever no dictionary entry
//! applies. Compound phrases are split by the [matcher](crate::matcher), and
//! each piece is resolved along with the matching piece of the prior
//! translation, so hand-edited fragments survive when other fragments change.
//!
//! # Example
//!
//! ```
//! use owb_i18n::{MissingTranslations, Resolver, TranslationDictionary};
//!
//! let mut dictionary = TranslationDictionary::new();
//! dictionary.with_direct("Sword", "name_fr", "Épée");
//!
//! let resolver = Resolver::new(&dictionary, "name_fr");
//! let mut missing = MissingTranslations::new();
//! let translated = resolver.resolve("Sword, Halberd", Some("Lame, Hallebarde"), &mut missing);
//!
//! assert_eq!(translated, "Épée, Hallebarde");
//! assert!(missing.contains("Halberd"));
//! ```

use crate::dictionary::TranslationDictionary;
use crate::matcher::{self, CHAMPION, PhraseMatch, Segment};
use crate::report::MissingTranslations;
use tracing::debug;

/// Resolves phrases into one target language
pub struct Resolver<'a> {
    dictionary: &'a TranslationDictionary,
    language: &'a str,
}

impl<'a> Resolver<'a> {
    /// `language` is the language field used in dictionary entries and
    /// records, e.g. `name_fr`
    pub fn new(dictionary: &'a TranslationDictionary, language: &'a str) -> Self {
        Resolver {
            dictionary,
            language,
        }
    }

    pub fn language(&self) -> &str {
        self.language
    }

    /// Translate `phrase`, starting from its prior translation if any
    ///
    /// Every piece that could not be translated from the dictionary is
    /// recorded into `missing`.
    pub fn resolve(
        &self,
        phrase: &str,
        prior: Option<&str>,
        missing: &mut MissingTranslations,
    ) -> String {
        self.resolve_at(phrase, prior, missing, 0)
    }

    // `depth` only indents the debug output; it never limits recursion.
    fn resolve_at(
        &self,
        phrase: &str,
        prior: Option<&str>,
        missing: &mut MissingTranslations,
        depth: usize,
    ) -> String {
        let indent = "__".repeat(depth);

        match matcher::match_phrase(phrase, prior, self.dictionary, self.language) {
            PhraseMatch::Empty => phrase.to_string(),
            PhraseMatch::Direct(translation) => {
                let result = matcher::substitute_trimmed(phrase, translation);
                debug!("{indent}DIRECT: '{phrase}'->'{result}'");
                result
            }
            // Known phrase, not translated yet: keep the English text
            PhraseMatch::DirectWithoutLanguage => phrase.to_string(),
            PhraseMatch::Champion { prior } => {
                let marker = self.resolve_at(CHAMPION, None, missing, depth + 1);
                format!("{prior} ({marker})")
            }
            PhraseMatch::Regex {
                rule,
                template,
                segments,
            } => {
                let values = self.resolve_segments(&segments, missing, depth);
                let filled = matcher::fill_template(template, &values);
                let result = matcher::substitute_trimmed(phrase, &filled);
                debug!(
                    "{indent}REGEX({}): '{phrase}'->'{result}'",
                    rule.pattern()
                );
                result
            }
            PhraseMatch::Split { kind, segments } => {
                let parts = self.resolve_segments(&segments, missing, depth);
                let result = kind.join(&parts);
                debug!("{indent}{}: '{phrase}'->'{result}'", kind.label());
                result
            }
            PhraseMatch::KeepPrior(prior) => {
                debug!("{indent}USE CURRENT: '{phrase}'->'{prior}'");
                // A prior identical to the English text was never translated
                let best_effort = if prior == phrase { "" } else { prior.trim() };
                missing.record(phrase, self.language, best_effort);
                prior.to_string()
            }
            PhraseMatch::Untranslated => {
                debug!("{indent}NOT TRANSLATED: '{phrase}'");
                if !phrase.trim().is_empty() {
                    missing.record(phrase, self.language, "");
                }
                phrase.to_string()
            }
        }
    }

    fn resolve_segments(
        &self,
        segments: &[Segment<'_>],
        missing: &mut MissingTranslations,
        depth: usize,
    ) -> Vec<String> {
        segments
            .iter()
            .map(|segment| self.resolve_at(segment.phrase, segment.prior, missing, depth + 1))
            .collect()
    }
}
