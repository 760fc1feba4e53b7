//! Phrase matching
//!
//! Decides, for a single phrase, which strategy of the translation cascade
//! applies. Matching is pure: it never recurses and never records anything.
//! Compound phrases come back as a list of [`Segment`]s that the
//! [`Resolver`](crate::resolver::Resolver) translates one by one.
//!
//! Strategies, in priority order:
//!
//! 1. Direct dictionary entry for the whole (trimmed) phrase
//! 2. `(champion)` suffix appended to an existing translation
//! 3. First regex rule matching the whole (trimmed) phrase
//! 4. Comma separated list
//! 5. Split around a `*`
//! 6. Split around a parenthesized group
//! 7. Split around a `{...}` placeholder
//! 8. Keep the prior translation
//! 9. Leave the phrase untranslated

use crate::dictionary::{RegexRule, TranslationDictionary};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static WILDCARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*)\*(.*)\z").expect("valid wildcard pattern"));
static PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*)\((.*)\)(.*)\z").expect("valid parentheses pattern"));
static BRACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*)\{.*\}(.*)\z").expect("valid braces pattern"));

const CHAMPION_MARKER: &str = "(champion)";

/// The word translated and appended when a prior translation lacks the champion marker
pub const CHAMPION: &str = "champion";

/// A piece of a compound phrase, with the matching piece of the prior translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub phrase: &'a str,
    pub prior: Option<&'a str>,
}

/// How a compound phrase was split, and so how its translated parts are joined back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    /// `a,b,c`
    List,
    /// `prefix*suffix`
    Wildcard,
    /// `prefix(inner)suffix`
    Parentheses,
    /// `prefix{...}suffix`, the braces and their content are dropped
    Braces,
}

impl SplitKind {
    pub fn join(self, parts: &[String]) -> String {
        match self {
            SplitKind::List => parts.join(","),
            SplitKind::Wildcard => parts.join("*"),
            SplitKind::Parentheses => match parts {
                [prefix, inner, suffix] => format!("{prefix}({inner}){suffix}"),
                _ => parts.concat(),
            },
            SplitKind::Braces => parts.concat().trim_end().to_string(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SplitKind::List => "LIST",
            SplitKind::Wildcard => "STAR",
            SplitKind::Parentheses => "PARENTHESES",
            SplitKind::Braces => "BRACES",
        }
    }
}

/// Outcome of matching one phrase against the dictionary
#[derive(Debug)]
pub enum PhraseMatch<'a> {
    /// Nothing to translate
    Empty,
    /// Direct entry found; the translation replaces the trimmed phrase
    Direct(&'a str),
    /// Direct entry found, but not yet translated into the target language
    DirectWithoutLanguage,
    /// Keep the prior translation and append the translated champion marker
    Champion { prior: &'a str },
    /// Regex rule matched; each segment fills the placeholder of the same rank
    Regex {
        rule: &'a RegexRule,
        template: &'a str,
        segments: Vec<Segment<'a>>,
    },
    /// Compound phrase, translated segment by segment
    Split {
        kind: SplitKind,
        segments: Vec<Segment<'a>>,
    },
    /// No rule applies, the prior translation is kept
    KeepPrior(&'a str),
    /// No rule applies and there is no prior translation
    Untranslated,
}

/// Find the strategy that applies to `phrase`
///
/// `prior` is the translation currently stored for the phrase, if any. An
/// empty prior counts as no prior.
pub fn match_phrase<'a>(
    phrase: &'a str,
    prior: Option<&'a str>,
    dictionary: &'a TranslationDictionary,
    language: &str,
) -> PhraseMatch<'a> {
    if phrase.is_empty() {
        return PhraseMatch::Empty;
    }
    let prior = prior.filter(|p| !p.is_empty());
    let trimmed = phrase.trim();

    if let Some(translations) = dictionary.direct_entry(trimmed) {
        return match translations.get(language) {
            Some(translation) => PhraseMatch::Direct(translation.as_str()),
            None => PhraseMatch::DirectWithoutLanguage,
        };
    }

    // Champion names are translated by hand; only the marker is added.
    if let Some(prior) = prior {
        if phrase.contains(CHAMPION_MARKER) && !prior.contains(CHAMPION_MARKER) {
            return PhraseMatch::Champion { prior };
        }
    }

    if let Some(found) = match_regex_rule(trimmed, prior, dictionary, language) {
        return found;
    }

    if phrase.contains(',') {
        return PhraseMatch::Split {
            kind: SplitKind::List,
            segments: split_list(phrase, prior),
        };
    }

    for (kind, pattern) in [
        (SplitKind::Wildcard, &*WILDCARD),
        (SplitKind::Parentheses, &*PARENTHESES),
        (SplitKind::Braces, &*BRACES),
    ] {
        if let Some(captures) = pattern.captures(phrase) {
            let prior_captures = prior.and_then(|p| pattern.captures(p));
            return PhraseMatch::Split {
                kind,
                segments: segments_from(&captures, prior_captures.as_ref()),
            };
        }
    }

    match prior {
        Some(prior) => PhraseMatch::KeepPrior(prior),
        None => PhraseMatch::Untranslated,
    }
}

fn match_regex_rule<'a>(
    trimmed: &'a str,
    prior: Option<&'a str>,
    dictionary: &'a TranslationDictionary,
    language: &str,
) -> Option<PhraseMatch<'a>> {
    for rule in dictionary.regex_rules() {
        let Some(captures) = rule.full_match(trimmed) else {
            continue;
        };
        // A rule without a template for the language does not count as a match
        let Some(template) = rule.template(language) else {
            continue;
        };
        let prior_captures = prior.and_then(|p| rule.full_match(p.trim()));
        return Some(PhraseMatch::Regex {
            rule,
            template,
            segments: segments_from(&captures, prior_captures.as_ref()),
        });
    }
    None
}

fn split_list<'a>(phrase: &'a str, prior: Option<&'a str>) -> Vec<Segment<'a>> {
    let parts: Vec<&str> = phrase.split(',').collect();
    // Prior pieces are only reused when both sides have the same number of items
    let prior_parts: Option<Vec<&str>> = prior
        .map(|p| p.split(',').collect::<Vec<_>>())
        .filter(|prior_parts| prior_parts.len() == parts.len());

    parts
        .iter()
        .enumerate()
        .map(|(i, &part)| Segment {
            phrase: part,
            prior: prior_parts.as_ref().map(|prior_parts| prior_parts[i]),
        })
        .collect()
}

fn segments_from<'a>(
    captures: &Captures<'a>,
    prior_captures: Option<&Captures<'a>>,
) -> Vec<Segment<'a>> {
    (1..captures.len())
        .map(|i| Segment {
            phrase: captures.get(i).map_or("", |m| m.as_str()),
            prior: prior_captures
                .and_then(|prior| prior.get(i))
                .map(|m| m.as_str()),
        })
        .collect()
}

/// Replace the first occurrence of the trimmed phrase with `replacement`,
/// keeping the whitespace around it
pub fn substitute_trimmed(phrase: &str, replacement: &str) -> String {
    phrase.replacen(phrase.trim(), replacement, 1)
}

/// Fill `$1`, `$2`, ... in a regex template with the translated captures
///
/// Higher placeholders are filled first so that `$1` never eats into `$10`.
pub fn fill_template(template: &str, values: &[String]) -> String {
    let mut result = template.to_string();
    for (index, value) in values.iter().enumerate().rev() {
        result = result.replace(&format!("${}", index + 1), value);
    }
    result
}
