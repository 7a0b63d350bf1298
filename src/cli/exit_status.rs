use std::process::ExitCode;

use crate::error::Error;

/// Exit status for CLI commands.
///
/// - `Success` (0): every site and catalog entry was handled
/// - `Failure` (1): a key could not be derived or compressed
/// - `Error` (2): internal error (I/O, parse error, misconfiguration)
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a single library error.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::UnsupportedNodeKind { .. }
            | Error::CompressionCollision { .. }
            | Error::InvalidCatalog(_) => ExitStatus::Failure,
            Error::Parse { .. } | Error::Misconfiguration { .. } | Error::Emit(_) => {
                ExitStatus::Error
            }
        }
    }

    /// Worst status over all errors, `Success` if there are none.
    pub fn from_errors<'a>(errors: impl IntoIterator<Item = &'a Error>) -> Self {
        errors
            .into_iter()
            .map(Self::from_error)
            .max()
            .unwrap_or(ExitStatus::Success)
    }
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
