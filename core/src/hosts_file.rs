use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use lanhosts_common::error::DiscoveryError;
use tracing::debug;

/// Writes `addresses` to `dir/file_name`, one `"<address>:<port> "` line each.
///
/// Existing content is truncated. `dir` is not created, so a missing
/// directory is reported as an error.
pub fn save_addresses_file(
    dir: &Path,
    file_name: &str,
    addresses: &[String],
    port: u16,
) -> Result<PathBuf, DiscoveryError> {
    let path: PathBuf = dir.join(file_name);
    write_lines(&path, addresses, port).map_err(|source| DiscoveryError::HostsFile {
        path: path.clone(),
        source,
    })?;

    debug!("wrote {} line(s) to {}", addresses.len(), path.display());
    Ok(path)
}

fn write_lines(path: &Path, addresses: &[String], port: u16) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for address in addresses {
        // The trailing space is part of the format consumers expect.
        writeln!(writer, "{address}:{port} ")?;
    }
    writer.flush()
}
