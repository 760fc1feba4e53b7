use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, value_parser};
use owb_i18n_checker::{
    COMMON_DICTIONARY_ENV, CheckerConfig, DEFAULT_COMMON_DICTIONARY, FormatterCommand, run,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = Command::new("translation-checker")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Uses a JSON file of common translation terms to update army translation files. \
             Next to the common file, a file named like the army file is used for army specific \
             translations.",
        )
        .arg(
            Arg::new("json-directory-path")
                .long("json-directory-path")
                .short('j')
                .value_name("PATH")
                .help("Path to the directory containing the JSON files to translate")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .value_name("LANG")
                .help("Language to check (fr, de, pl, it...)")
                .required(true),
        )
        .arg(
            Arg::new("common-data-path")
                .long("common-data-path")
                .short('c')
                .value_name("PATH")
                .help("Path to the common.json file; its directory is searched for army translation files")
                .env(COMMON_DICTIONARY_ENV)
                .default_value(DEFAULT_COMMON_DICTIONARY)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .short('f')
                .value_name("FILTER")
                .help("Only check files whose name contains FILTER"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Display debug information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prettify")
                .long("prettify")
                .short('p')
                .help("Reformat the files with 'prettier' at the end")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('r')
                .help("Do not write the translated files")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("debug"));

    let records_dir = matches
        .get_one::<PathBuf>("json-directory-path")
        .context("missing --json-directory-path")?;
    let language = matches
        .get_one::<String>("language")
        .context("missing --language")?;
    let common_dictionary = matches
        .get_one::<PathBuf>("common-data-path")
        .context("missing --common-data-path")?;

    let mut config = CheckerConfig::new(records_dir, language);
    config
        .with_common_dictionary(common_dictionary)
        .with_dry_run(matches.get_flag("dry-run"));
    if let Some(filter) = matches.get_one::<String>("filter") {
        config.with_filter(filter);
    }
    if matches.get_flag("prettify") {
        config.with_formatter(FormatterCommand::prettier());
    }

    let summary = run(&config).with_context(|| {
        format!(
            "translation check of {} failed",
            config.records_dir.display()
        )
    })?;
    info!(
        "Checked {} files, {} missing translations",
        summary.file_count(),
        summary.missing_count()
    );
    Ok(())
}

/// `RUST_LOG` applies when set, `info` otherwise; `--debug` always enables debug
fn init_tracing(debug: bool) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if debug {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}
