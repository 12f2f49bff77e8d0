pub mod discover;

use std::path::PathBuf;

use clap::Parser;
use lanhosts_common::config::{
    self, Config, DEFAULT_HOSTS_FILE, DEFAULT_SCAN_COMMAND, SSH_PORT,
};
use lanhosts_common::error::DiscoveryError;

#[derive(Parser, Debug)]
#[command(name = "lanhosts")]
#[command(about = "Collects LAN addresses with arp-scan into a host:port list.")]
pub struct CommandLine {
    /// Directory for the hosts file [default: <program root>/files]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name of the hosts file
    #[arg(short, long, default_value = DEFAULT_HOSTS_FILE)]
    pub file_name: String,

    /// Port written after every address
    #[arg(short, long, default_value_t = SSH_PORT)]
    pub port: u16,

    /// Scan only this interface (repeatable) instead of every interface
    #[arg(short, long = "interface", value_name = "NAME")]
    pub interfaces: Vec<String>,

    /// Base scanner command, `--interface=<name>` is appended
    #[arg(short = 'c', long = "command", default_value = DEFAULT_SCAN_COMMAND)]
    pub scan_command: String,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Result<Config, DiscoveryError> {
        let files_dir: PathBuf = match self.output_dir {
            Some(dir) => dir,
            None => config::program_files_dir().map_err(DiscoveryError::ProgramLocation)?,
        };

        let mut cfg: Config = Config::new(files_dir);
        cfg.scan_command = self.scan_command;
        cfg.file_name = self.file_name;
        cfg.port = self.port;
        cfg.interfaces = (!self.interfaces.is_empty()).then_some(self.interfaces);
        Ok(cfg)
    }
}
