use crate::formatter::FormatterCommand;
use owb_i18n::language_field;
use std::path::{Path, PathBuf};

/// Common dictionary used when none is given, relative to the working directory
pub const DEFAULT_COMMON_DICTIONARY: &str = "translation/common.json";

/// Environment variable overriding [`DEFAULT_COMMON_DICTIONARY`]
pub const COMMON_DICTIONARY_ENV: &str = "OWB_COMMON_DICTIONARY";

/// Options of one checker run
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Directory holding the army files to translate
    pub records_dir: PathBuf,
    /// Language code, e.g. `fr`
    pub language: String,
    /// Common dictionary; its directory also holds per-army dictionaries and dumps
    pub common_dictionary: PathBuf,
    /// Only check files whose name contains this text
    pub filter: Option<String>,
    /// Leave army files untouched (dumps are still written)
    pub dry_run: bool,
    /// Formatter run over `records_dir` at the end
    pub formatter: Option<FormatterCommand>,
}

impl CheckerConfig {
    pub fn new(records_dir: impl Into<PathBuf>, language: &str) -> Self {
        CheckerConfig {
            records_dir: records_dir.into(),
            language: language.to_string(),
            common_dictionary: PathBuf::from(DEFAULT_COMMON_DICTIONARY),
            filter: None,
            dry_run: false,
            formatter: None,
        }
    }

    pub fn with_common_dictionary(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.common_dictionary = path.into();
        self
    }

    pub fn with_filter(&mut self, filter: &str) -> &mut Self {
        self.filter = Some(filter.to_string());
        self
    }

    pub fn with_dry_run(&mut self, dry_run: bool) -> &mut Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_formatter(&mut self, formatter: FormatterCommand) -> &mut Self {
        self.formatter = Some(formatter);
        self
    }

    /// Record and dictionary field of the language, e.g. `name_fr`
    pub fn language_field(&self) -> String {
        language_field(&self.language)
    }

    /// Directory of the common dictionary
    pub fn dictionary_dir(&self) -> &Path {
        match self.common_dictionary.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn matches_filter(&self, file_name: &str) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|filter| filter.is_empty() || file_name.contains(filter))
    }
}
