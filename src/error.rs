use std::ffi::OsString;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LaunchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing to launch; detected before any start attempt.
    Usage,
    /// The OS did not produce a running process.
    LaunchFailure,
    /// Anything else raised while handling arguments or the child.
    Fault,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No arguments specified.")]
    NoArguments,

    #[error("Process '{target}' couldn't be started.")]
    NotStarted { target: String },

    #[error("Process '{target}' couldn't be started. {source}")]
    StartFailed {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Argument {index} is not valid Unicode: {value:?}")]
    InvalidArgument { index: usize, value: OsString },

    #[error("Target '{target}' or its arguments contain a NUL character")]
    InvalidTarget { target: String },

    #[error("Failed while waiting for process '{target}': {source}")]
    Wait {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Running a process as administrator is not supported on this platform")]
    ElevationUnsupported,

    #[error("Processes can only be started through the shell")]
    ShellRequired,

    #[error("Failed to initialize COM for the shell launch: {source}")]
    ComInit {
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LaunchError::NoArguments => ErrorKind::Usage,
            LaunchError::NotStarted { .. } | LaunchError::StartFailed { .. } => {
                ErrorKind::LaunchFailure
            }
            LaunchError::InvalidArgument { .. }
            | LaunchError::InvalidTarget { .. }
            | LaunchError::Wait { .. }
            | LaunchError::ElevationUnsupported
            | LaunchError::ShellRequired
            | LaunchError::ComInit { .. } => ErrorKind::Fault,
        }
    }

    /// Text shown in the error dialog. Faults carry their full debug chain.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Usage | ErrorKind::LaunchFailure => self.to_string(),
            ErrorKind::Fault => format!("{self}\n\n{self:?}"),
        }
    }
}
