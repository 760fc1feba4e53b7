use owb_i18n::I18nError;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("failed to read directory {path}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run formatter '{command}'")]
    FormatterSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("formatter '{command}' failed ({status}): {output}")]
    FormatterFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },
}

pub type CheckerResult<T> = Result<T, CheckerError>;
