use std::io;
use std::path::{Path, PathBuf};

/// Base command line for the ARP scanner, before the per-interface flag is appended.
pub const DEFAULT_SCAN_COMMAND: &str = "sudo arp-scan --localnet";
pub const DEFAULT_HOSTS_FILE: &str = "hosts";
pub const SSH_PORT: u16 = 22;
/// Name of the output directory under the program root.
pub const FILES_DIR: &str = "files";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Space separated base command. Split on single spaces, so repeated
    /// spaces produce empty arguments.
    pub scan_command: String,
    /// Directory the hosts file is written into. Must already exist.
    pub files_dir: PathBuf,
    pub file_name: String,
    /// Port appended to every address in the hosts file.
    pub port: u16,
    /// Interfaces to scan instead of asking the operating system.
    pub interfaces: Option<Vec<String>>,
}

impl Config {
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            scan_command: DEFAULT_SCAN_COMMAND.to_string(),
            files_dir: files_dir.into(),
            file_name: DEFAULT_HOSTS_FILE.to_string(),
            port: SSH_PORT,
            interfaces: None,
        }
    }
}

/// Locates `<program-root>/files` from the running executable.
///
/// The program root is the parent of the directory holding the executable,
/// so the result does not depend on the current working directory.
pub fn program_files_dir() -> io::Result<PathBuf> {
    let exe: PathBuf = std::env::current_exe()?.canonicalize()?;
    Ok(files_dir_for(&exe))
}

pub fn files_dir_for(executable: &Path) -> PathBuf {
    let exe_dir: &Path = executable.parent().unwrap_or(executable);
    let root: &Path = exe_dir.parent().unwrap_or(exe_dir);
    root.join(FILES_DIR)
}
