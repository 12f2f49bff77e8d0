use std::borrow::Cow;

use crate::error::DiscoveryError;

/// Exit status and captured standard output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedProcess {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
}

impl CompletedProcess {
    pub fn new(code: Option<i32>, stdout: impl Into<Vec<u8>>) -> Self {
        Self { code, stdout: stdout.into() }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }
}

/// Runs a command line to completion.
pub trait CommandRunner {
    /// `argv[0]` is the program, the rest are its arguments.
    fn run(&self, argv: &[String]) -> Result<CompletedProcess, DiscoveryError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, argv: &[String]) -> Result<CompletedProcess, DiscoveryError> {
        (**self).run(argv)
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for Box<T> {
    fn run(&self, argv: &[String]) -> Result<CompletedProcess, DiscoveryError> {
        (**self).run(argv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_exit_is_success() {
        assert!(CompletedProcess::new(Some(0), "").success());
        assert!(!CompletedProcess::new(Some(1), "").success());
        assert!(!CompletedProcess::new(None, "").success());
    }

    #[test]
    fn stdout_text_replaces_invalid_utf8() {
        let done = CompletedProcess::new(Some(0), vec![b'1', b'.', 0xff]);
        assert_eq!(done.stdout_text(), "1.\u{fffd}");
    }
}
