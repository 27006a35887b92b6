use std::process::ExitCode;

/// Process exit status of a textscout run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file was processed.
    Success,
    /// The run completed, but some files were skipped (or `init` found an
    /// existing config).
    Failure,
    /// The run could not complete: bad arguments or config, missing scan root,
    /// or a single-file detection whose file did not parse.
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
