//! # lanhosts core
//!
//! Drives the external ARP scanner once per interface and turns its output into
//! a `host:port` list on disk.
//!
//! * **[`discovery`]**: the service tying the pieces together.
//! * **[`scanner`]**: per-interface scan loop and output parsing.
//! * **[`runner`]**: subprocess execution.
//! * **[`command`]**: command-line construction.
//! * **[`hosts_file`]**: the output file writer.

pub mod command;
pub mod discovery;
pub mod hosts_file;
pub mod runner;
pub mod scanner;
