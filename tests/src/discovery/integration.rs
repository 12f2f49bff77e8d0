#![cfg(test)]
use std::fs;

use lanhosts_common::config::Config;
use lanhosts_common::error::{DiscoveryError, FailureKind};
use lanhosts_common::network::interface::FixedInterfaces;
use lanhosts_core::discovery::DiscoveryService;
use lanhosts_core::runner::SystemRunner;
use tempfile::tempdir;

fn service(cfg: Config, interfaces: &[&str]) -> DiscoveryService {
    let names: Vec<String> = interfaces.iter().map(|n| n.to_string()).collect();
    DiscoveryService::new(cfg, Box::new(FixedInterfaces(names)), Box::new(SystemRunner))
}

/// `echo` stands in for the scanner: it prints its arguments, including the
/// interface flag, so every interface yields the same address.
#[test]
fn echo_scanner_end_to_end() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let mut cfg: Config = Config::new(dir.path());
    cfg.scan_command = "echo 192.168.178.1 (fritz.box)".into();

    let svc = service(cfg, &["eth0", "wlan0"]);
    let ips: Vec<String> = svc.discover()?;
    assert_eq!(ips, vec!["192.168.178.1", "192.168.178.1"]);

    let path = svc.save(&ips)?;
    assert_eq!(fs::read_to_string(path)?, "192.168.178.1:22 \n192.168.178.1:22 \n");
    Ok(())
}

#[test]
fn failing_scanner_yields_empty_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("hosts"), "10.0.0.99:22 \n")?;
    let mut cfg: Config = Config::new(dir.path());
    cfg.scan_command = "false".into();

    let svc = service(cfg, &["eth0", "eth1", "lo"]);
    let ips: Vec<String> = svc.discover()?;
    assert!(ips.is_empty());

    svc.save(&ips)?;
    assert_eq!(fs::read_to_string(dir.path().join("hosts"))?, "");
    Ok(())
}

#[test]
fn no_interfaces_writes_empty_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let svc = service(Config::new(dir.path()), &[]);

    let ips: Vec<String> = svc.discover()?;
    assert!(ips.is_empty());
    svc.save(&ips)?;
    assert_eq!(fs::read_to_string(dir.path().join("hosts"))?, "");
    Ok(())
}

#[test]
fn missing_scanner_is_not_found() {
    let dir = tempdir().unwrap();
    let mut cfg: Config = Config::new(dir.path());
    cfg.scan_command = "lanhosts-definitely-missing --localnet".into();

    let err: DiscoveryError = service(cfg, &["eth0"]).discover().unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotFound);
}

#[test]
fn missing_output_directory_is_not_found() {
    let dir = tempdir().unwrap();
    let cfg: Config = Config::new(dir.path().join("files"));

    let err: DiscoveryError = service(cfg, &[])
        .save(&["10.0.0.1".to_string()])
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotFound);
}

#[test]
fn port_and_file_name_follow_config() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let mut cfg: Config = Config::new(dir.path());
    cfg.file_name = "lan".into();
    cfg.port = 2222;

    let path = service(cfg, &[]).save(&["10.0.0.1".to_string(), "10.0.0.2".to_string()])?;
    assert_eq!(path, dir.path().join("lan"));
    assert_eq!(fs::read_to_string(path)?, "10.0.0.1:2222 \n10.0.0.2:2222 \n");
    Ok(())
}
