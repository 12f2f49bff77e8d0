use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse grouping used by the entry point to decide which failures are
/// reported and which are allowed to terminate the process.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureKind {
    /// A file or executable that had to exist was missing.
    NotFound,
    /// The command or the program location was unusable.
    Runtime,
    /// Any other I/O failure, e.g. permission denied or a full disk.
    Other,
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("scan command is empty")]
    EmptyCommand,

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write hosts file {}: {source}", path.display())]
    HostsFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to locate the program directory: {0}")]
    ProgramLocation(#[source] io::Error),
}

impl DiscoveryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DiscoveryError::EmptyCommand | DiscoveryError::ProgramLocation(_) => {
                FailureKind::Runtime
            }
            DiscoveryError::Spawn { source, .. } | DiscoveryError::HostsFile { source, .. } => {
                io_kind(source)
            }
        }
    }
}

fn io_kind(err: &io::Error) -> FailureKind {
    match err.kind() {
        io::ErrorKind::NotFound => FailureKind::NotFound,
        _ => FailureKind::Other,
    }
}
