use std::path::Path;

use tracing::info;

/// Events on this target are printed without a level symbol.
pub const PRINT_TARGET: &str = "lanhosts::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn found_line(addresses: &[String]) -> String {
    format!("Found the following IPs: {addresses:?}")
}

pub fn saved_line(count: usize, path: &Path) -> String {
    let noun: &str = if count == 1 { "address" } else { "addresses" };
    format!("Saved {count} {noun} to {}", path.display())
}

pub fn found(addresses: &[String]) {
    print(&found_line(addresses));
}

pub fn saved(count: usize, path: &Path) {
    info!("{}", saved_line(count, path));
}
