//! Translation checker for army-list files
//!
//! Updates the `name_<code>` fields of every army file in a directory from a
//! common dictionary and optional per-army dictionaries, and dumps the
//! phrases still lacking a translation for human review.
//!
//! # Workflow Example
//!
//! ```no_run
//! use owb_i18n_checker::{CheckerConfig, run};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = CheckerConfig::new("public/games/the-old-world", "fr");
//!     config
//!         .with_common_dictionary("public/games/the-old-world/translation/common.json")
//!         .with_filter("empire")
//!         .with_dry_run(true);
//!
//!     let summary = run(&config)?;
//!     println!("{} missing translations", summary.missing_count());
//!     Ok(())
//! }
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod formatter;


pub use checker::{FileReport, RunSummary, army_files, check_file, dump_path, run};
pub use config::{COMMON_DICTIONARY_ENV, CheckerConfig, DEFAULT_COMMON_DICTIONARY};
pub use error::{CheckerError, CheckerResult};
pub use formatter::FormatterCommand;
