use std::path::PathBuf;

use lanhosts_common::config::Config;
use lanhosts_common::error::{DiscoveryError, FailureKind};
use lanhosts_core::discovery::DiscoveryService;
use tracing::error;

use crate::terminal::print;

/// Scans the LAN and writes the hosts file.
pub fn discover(cfg: Config) -> Result<(), DiscoveryError> {
    let service = DiscoveryService::from_config(cfg);
    let lan_ips: Vec<String> = service.discover()?;
    print::found(&lan_ips);

    let path: PathBuf = service.save(&lan_ips)?;
    print::saved(lan_ips.len(), &path);
    Ok(())
}

/// Reports missing files and runtime failures and ends normally. Anything
/// else is handed back to `main`.
pub fn report(outcome: Result<(), DiscoveryError>) -> anyhow::Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(err) => match err.kind() {
            FailureKind::NotFound | FailureKind::Runtime => {
                error!("{err}");
                Ok(())
            }
            FailureKind::Other => Err(err.into()),
        },
    }
}
