use std::process::{Command, Output, Stdio};

use lanhosts_common::error::DiscoveryError;
use lanhosts_common::process::{CommandRunner, CompletedProcess};
use tracing::trace;

/// Runs commands as real child processes, blocking until they exit.
///
/// There is no timeout: a scanner that never exits blocks the caller.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CompletedProcess, DiscoveryError> {
        let (program, args) = argv.split_first().ok_or(DiscoveryError::EmptyCommand)?;

        trace!("spawning {argv:?}");
        let output: Output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DiscoveryError::Spawn {
                program: program.clone(),
                source,
            })?;

        Ok(CompletedProcess::new(output.status.code(), output.stdout))
    }
}
