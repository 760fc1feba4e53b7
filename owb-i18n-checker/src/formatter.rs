//! External formatter run over the record directory once all files are written

use crate::error::{CheckerError, CheckerResult};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Stands for the record directory in formatter arguments
pub const TARGET_PLACEHOLDER: &str = "{dir}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterCommand {
    program: String,
    args: Vec<String>,
}

impl FormatterCommand {
    /// `args` may contain [`TARGET_PLACEHOLDER`], replaced by the directory to format
    pub fn new(program: &str, args: &[&str]) -> Self {
        FormatterCommand {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// `npx prettier <dir> --write`
    pub fn prettier() -> Self {
        FormatterCommand::new("npx", &["prettier", TARGET_PLACEHOLDER, "--write"])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for formatting `target`
    pub fn args_for(&self, target: &Path) -> Vec<String> {
        let target = target.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace(TARGET_PLACEHOLDER, &target))
            .collect()
    }

    /// Run the formatter on `target` and wait for it
    ///
    /// # Errors
    /// - The program cannot be started
    /// - The program exits with a failure status; its output is kept in the error
    pub fn run(&self, target: &Path) -> CheckerResult<()> {
        let args = self.args_for(target);
        let command_line = std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        debug!("{command_line}");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| CheckerError::FormatterSpawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(CheckerError::FormatterFailed {
                command: command_line,
                status: output.status,
                output: text.trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettier_arguments() {
        let formatter = FormatterCommand::prettier();
        assert_eq!(formatter.program(), "npx");
        assert_eq!(
            formatter.args_for(Path::new("public/games/the-old-world")),
            vec!["prettier", "public/games/the-old-world", "--write"]
        );
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let formatter = FormatterCommand::new("owb-i18n-no-such-formatter", &[TARGET_PLACEHOLDER]);
        let err = formatter.run(Path::new(".")).unwrap_err();
        assert!(matches!(err, CheckerError::FormatterSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_formatter() {
        let formatter = FormatterCommand::new("true", &[TARGET_PLACEHOLDER]);
        assert!(formatter.run(Path::new(".")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_formatter_keeps_output() {
        let formatter = FormatterCommand::new("sh", &["-c", "echo cannot format {dir}; exit 2"]);
        let err = formatter.run(Path::new("armies")).unwrap_err();
        match err {
            CheckerError::FormatterFailed { output, status, .. } => {
                assert_eq!(output, "cannot format armies");
                assert_eq!(status.code(), Some(2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
