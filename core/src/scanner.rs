//! Per-interface ARP scan loop.
//!
//! Interfaces are scanned one after another; every scan blocks until the
//! external tool exits. A scan that exits non-zero contributes nothing, while
//! a scan that cannot be started at all aborts the whole run.

use lanhosts_common::config::Config;
use lanhosts_common::error::DiscoveryError;
use lanhosts_common::network::address::extract_addresses;
use lanhosts_common::process::{CommandRunner, CompletedProcess};
use tracing::{debug, info_span};

use crate::command::{interface_flag, parse_command};

pub struct ArpScanner<R: CommandRunner> {
    command: String,
    runner: R,
}

impl<R: CommandRunner> ArpScanner<R> {
    pub fn new(cfg: &Config, runner: R) -> Self {
        Self {
            command: cfg.scan_command.clone(),
            runner,
        }
    }

    /// Scans each interface in turn and concatenates the addresses found.
    ///
    /// Order follows `interfaces`, then the order of appearance in each
    /// scanner output. Duplicates are kept.
    pub fn scan(&self, interfaces: &[String]) -> Result<Vec<String>, DiscoveryError> {
        let mut lan_ips: Vec<String> = Vec::new();

        for iface in interfaces {
            let span = info_span!("arp_scan", interface = %iface);
            let _guard = span.enter();

            let argv: Vec<String> = parse_command(&self.command, [interface_flag(iface)]);
            let completed: CompletedProcess = self.runner.run(&argv)?;
            let found: Vec<String> = parse_output(&completed);

            debug!("{iface}: {} address(es)", found.len());
            lan_ips.extend(found);
        }

        Ok(lan_ips)
    }
}

/// Addresses in the output of a finished scan, or none if it failed.
pub fn parse_output(completed: &CompletedProcess) -> Vec<String> {
    if !completed.success() {
        debug!("scanner exited with {:?}, skipping", completed.code);
        return Vec::new();
    }
    extract_addresses(&completed.stdout_text())
}
