//! Record tree traversal
//!
//! Army files are arbitrary trees of objects and arrays. Any object holding a
//! `name_en` field is a translatable record; its language field is rebuilt
//! from the English name and the value it currently holds.

use crate::dictionary::TranslationDictionary;
use crate::report::MissingTranslations;
use crate::resolver::Resolver;
use serde_json::{Map, Value};
use tracing::warn;

/// Field holding the English reference text of a record
pub const REFERENCE_FIELD: &str = "name_en";

/// Record field for a language code: `fr` -> `name_fr`
pub fn language_field(code: &str) -> String {
    format!("name_{code}")
}

/// Translate every record of `tree` in place into `language`
///
/// Returns the phrases that could not be translated from the dictionary.
pub fn walk(
    tree: &mut Value,
    dictionary: &TranslationDictionary,
    language: &str,
) -> MissingTranslations {
    let resolver = Resolver::new(dictionary, language);
    let mut missing = MissingTranslations::new();
    walk_with(tree, &resolver, &mut missing);
    missing
}

/// Same as [`walk`], accumulating into an existing report
pub fn walk_with(tree: &mut Value, resolver: &Resolver<'_>, missing: &mut MissingTranslations) {
    match tree {
        Value::Object(object) => {
            translate_record(object, resolver, missing);
            for child in object.values_mut() {
                walk_with(child, resolver, missing);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_with(item, resolver, missing);
            }
        }
        _ => {}
    }
}

fn translate_record(
    object: &mut Map<String, Value>,
    resolver: &Resolver<'_>,
    missing: &mut MissingTranslations,
) {
    let Some(reference) = object.get(REFERENCE_FIELD) else {
        return;
    };
    let Some(english) = reference.as_str() else {
        warn!("Skipping record with non-text {REFERENCE_FIELD}: {reference}");
        return;
    };

    let prior = object.get(resolver.language()).and_then(Value::as_str);
    let translation = resolver.resolve(english, prior, missing);
    object.insert(resolver.language().to_string(), Value::String(translation));
}
