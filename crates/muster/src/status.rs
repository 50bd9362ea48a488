use std::process::ExitCode;

/// How the process ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Linting was successful and there were no violations.
    Success,
    /// Linting was successful but there were violations left.
    Failure,
    /// Linting failed: a file could not be parsed, the configuration is
    /// invalid, or fixes were refused.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
