use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::MacroEvaluationError;

/// Default name of the executable that is used to evaluate macros.
pub const DEFAULT_RPM: &str = "rpm";

/// Macro that expands to the distribution tag (for example, `.fc40` or `.el9`), or to an empty
/// string if the current system does not define one.
pub const DIST_MACRO: &str = "{?dist}";

/// This trait abstracts over things that can expand RPM macros.
pub trait MacroEvaluator {
    /// Expand the macro with the given name (without the leading `%`).
    fn evaluate(&self, macro_name: &str) -> Result<String, MacroEvaluationError>;
}

/// This struct evaluates macros by running `rpm --eval %<macro>`.
#[derive(Debug, Clone)]
pub struct RpmEval {
    executable: PathBuf,
}

impl RpmEval {
    /// Use the given executable instead of `rpm` from `$PATH`.
    pub fn new(executable: impl Into<PathBuf>) -> RpmEval {
        RpmEval {
            executable: executable.into(),
        }
    }

    /// Path of the executable that is run.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn args(macro_name: &str) -> [OsString; 2] {
        [OsString::from("--eval"), OsString::from(format!("%{}", macro_name))]
    }

    fn command_line(&self, macro_name: &str) -> String {
        let args: Vec<String> = RpmEval::args(macro_name)
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        format!("{} {}", self.executable.display(), args.join(" "))
    }
}

impl Default for RpmEval {
    fn default() -> RpmEval {
        RpmEval::new(DEFAULT_RPM)
    }
}

impl MacroEvaluator for RpmEval {
    fn evaluate(&self, macro_name: &str) -> Result<String, MacroEvaluationError> {
        let command_line = self.command_line(macro_name);
        log::debug!("About to execute '{}'", command_line);

        // output() waits for the child and closes both pipes, also when reading fails
        let output = Command::new(&self.executable)
            .args(RpmEval::args(macro_name))
            .output()
            .map_err(|error| MacroEvaluationError::Launch {
                macro_name: macro_name.to_string(),
                source: error,
            })?;

        // rpm prints informational messages to stderr even if it succeeds
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            log::info!("{}", line);
        }

        if !output.status.success() {
            return Err(MacroEvaluationError::NonZeroExit {
                macro_name: macro_name.to_string(),
                command: command_line,
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
