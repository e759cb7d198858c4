use thiserror::Error;

/// Errors that can occur when asking `rpm` to evaluate a macro.
#[derive(Debug, Error)]
pub enum MacroEvaluationError {
    /// The `rpm` process could not be started.
    #[error("Unable to evaluate macro: {macro_name}: {source}")]
    Launch {
        /// name of the macro that was evaluated
        macro_name: String,
        /// underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The `rpm` process exited with a non-zero status or was killed by a signal.
    #[error("rpm --eval returned: '{}' executing '{}'", display_code(.code), .command)]
    NonZeroExit {
        /// name of the macro that was evaluated
        macro_name: String,
        /// command line that was executed
        command: String,
        /// exit code, if the process was not terminated by a signal
        code: Option<i32>,
    },
}

impl MacroEvaluationError {
    /// Name of the macro that failed to evaluate.
    pub fn macro_name(&self) -> &str {
        match self {
            MacroEvaluationError::Launch { macro_name, .. } => macro_name,
            MacroEvaluationError::NonZeroExit { macro_name, .. } => macro_name,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => String::from("terminated by signal"),
    }
}
