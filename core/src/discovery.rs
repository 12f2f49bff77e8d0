//! # LAN Discovery Service
//!
//! Enumerates interfaces, runs the ARP scanner on each of them and persists the
//! collected addresses as a hosts file.

use std::path::PathBuf;

use lanhosts_common::config::Config;
use lanhosts_common::error::DiscoveryError;
use lanhosts_common::network::interface::{FixedInterfaces, InterfaceProvider, SystemInterfaces};
use lanhosts_common::process::CommandRunner;
use tracing::debug;

use crate::hosts_file::save_addresses_file;
use crate::runner::SystemRunner;
use crate::scanner::ArpScanner;

/// Orchestrates a discovery run.
///
/// 1. asks the [`InterfaceProvider`] which interfaces exist.
/// 2. scans each of them through the [`CommandRunner`].
/// 3. writes the result with [`save_addresses_file`].
pub struct DiscoveryService {
    cfg: Config,
    interfaces: Box<dyn InterfaceProvider>,
    scanner: ArpScanner<Box<dyn CommandRunner>>,
}

impl DiscoveryService {
    pub fn new(
        cfg: Config,
        interfaces: Box<dyn InterfaceProvider>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        let scanner = ArpScanner::new(&cfg, runner);
        Self {
            cfg,
            interfaces,
            scanner,
        }
    }

    /// Wires the real subprocess runner and either the configured interface
    /// list or the operating system's.
    pub fn from_config(cfg: Config) -> Self {
        let interfaces: Box<dyn InterfaceProvider> = match &cfg.interfaces {
            Some(names) => Box::new(FixedInterfaces(names.clone())),
            None => Box::new(SystemInterfaces),
        };
        Self::new(cfg, interfaces, Box::new(SystemRunner))
    }

    /// Scans every interface and returns the addresses found.
    pub fn discover(&self) -> Result<Vec<String>, DiscoveryError> {
        let interfaces: Vec<String> = self.interfaces.interface_names();
        debug!("scanning {} network interface(s)", interfaces.len());
        self.scanner.scan(&interfaces)
    }

    /// Persists `addresses` to the configured hosts file.
    pub fn save(&self, addresses: &[String]) -> Result<PathBuf, DiscoveryError> {
        save_addresses_file(
            &self.cfg.files_dir,
            &self.cfg.file_name,
            addresses,
            self.cfg.port,
        )
    }
}
