//! Checking a directory of army files
//!
//! For every `*.json` army file:
//!
//! 1. The common dictionary is merged with the army dictionary, the file of
//!    the same name next to the common dictionary, when there is one.
//! 2. Every record of the army file is translated.
//! 3. The army file is written back, unless running dry.
//! 4. The missing translations are dumped next to the dictionaries as
//!    `<army>-dump.json`.

use crate::config::CheckerConfig;
use crate::error::{CheckerError, CheckerResult};
use owb_i18n::{MissingTranslations, TranslationDictionary, read_json, walk, write_json};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of checking one army file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Army dictionary merged over the common one, if found
    pub army_dictionary: Option<PathBuf>,
    pub missing: MissingTranslations,
    pub dump_path: PathBuf,
    /// Whether the army file was rewritten
    pub written: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn missing_count(&self) -> usize {
        self.files.iter().map(|file| file.missing.len()).sum()
    }
}

/// Check every army file selected by `config`, then run the formatter if any
///
/// Stops at the first error; files already written stay written.
pub fn run(config: &CheckerConfig) -> CheckerResult<RunSummary> {
    debug!(
        "Use main translation file: {}",
        config.common_dictionary.display()
    );
    let common = TranslationDictionary::load(&config.common_dictionary)?;
    debug!(
        "{} direct entries, {} regex rules",
        common.direct_len(),
        common.regex_len()
    );

    let mut summary = RunSummary::default();
    for path in army_files(config)? {
        summary.files.push(check_file(config, &common, &path)?);
    }

    if let Some(formatter) = &config.formatter {
        formatter.run(&config.records_dir)?;
    }
    Ok(summary)
}

/// Army files of the records directory that pass the filter, sorted by name
pub fn army_files(config: &CheckerConfig) -> CheckerResult<Vec<PathBuf>> {
    let read_error = |source: std::io::Error| CheckerError::ReadDirectory {
        path: config.records_dir.clone(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(&config.records_dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !file_name.ends_with(".json") || !config.matches_filter(file_name) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Translate one army file with `common` and its own army dictionary
pub fn check_file(
    config: &CheckerConfig,
    common: &TranslationDictionary,
    path: &Path,
) -> CheckerResult<FileReport> {
    let file_name = path.file_name().map(PathBuf::from).unwrap_or_default();
    info!(
        "Check: {} using {}",
        file_name.display(),
        config.common_dictionary.display()
    );
    let mut army: Value = read_json(path)?;

    let army_path = config.dictionary_dir().join(&file_name);
    let merged;
    let (dictionary, army_dictionary) = if army_path.is_file() {
        info!("Check: {} using {}", file_name.display(), army_path.display());
        let overrides = TranslationDictionary::load(&army_path)?;
        merged = TranslationDictionary::merged(common, &overrides);
        (&merged, Some(army_path))
    } else {
        (common, None)
    };

    let missing = walk(&mut army, dictionary, &config.language_field());

    let written = !config.dry_run;
    if written {
        write_json(path, &army)?;
    }

    let dump_path = dump_path(config.dictionary_dir(), path);
    write_json(&dump_path, &missing.to_dump())?;
    info!(
        "{} missing translations, see {}",
        missing.len(),
        dump_path.display()
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        army_dictionary,
        missing,
        dump_path,
        written,
    })
}

/// Dump file of an army file: `<dictionary_dir>/<army>-dump.json`
pub fn dump_path(dictionary_dir: &Path, army_path: &Path) -> PathBuf {
    let stem = army_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    dictionary_dir.join(format!("{stem}-dump.json"))
}
