//! Dictionary-driven translation of army-list records
//!
//! Army files store, next to every English `name_en`, one `name_<code>` field
//! per language. This crate rebuilds those fields from a translation
//! dictionary made of direct phrase entries and regex rules, decomposing
//! compound names (lists, `*`, parentheses, `{...}` placeholders) and keeping
//! the existing translation of any piece the dictionary does not know.
//!
//! # Example
//!
//! ```
//! use owb_i18n::{TranslationDictionary, walk};
//! use serde_json::json;
//!
//! let mut dictionary = TranslationDictionary::new();
//! dictionary.with_direct("Hand weapon", "name_fr", "Arme de base");
//! dictionary
//!     .with_regex(r"Level (\d+) Wizard", "name_fr", "Sorcier de niveau $1")
//!     .unwrap();
//!
//! let mut army = json!({
//!     "characters": [
//!         { "name_en": "Hand weapon, Level 2 Wizard" },
//!         { "name_en": "Arch Lector", "name_fr": "Archi-lecteur" }
//!     ]
//! });
//! let missing = walk(&mut army, &dictionary, "name_fr");
//!
//! assert_eq!(army["characters"][0]["name_fr"], "Arme de base, Sorcier de niveau 2");
//! assert_eq!(army["characters"][1]["name_fr"], "Archi-lecteur");
//! assert!(missing.contains("Arch Lector"));
//! ```

pub mod dictionary;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod report;
pub mod resolver;
pub mod store;
pub mod walker;

pub use dictionary::{RegexRule, TranslationDictionary};
pub use error::{I18nError, I18nResult};
pub use loader::{DictionaryFile, LanguageMap};
pub use matcher::{PhraseMatch, Segment, SplitKind, match_phrase};
pub use report::MissingTranslations;
pub use resolver::Resolver;
pub use store::{read_json, write_json};
pub use walker::{REFERENCE_FIELD, language_field, walk, walk_with};
