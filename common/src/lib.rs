//! Shared building blocks for `lanhosts`.
//!
//! * **[`config`]**: the run configuration handed to every component.
//! * **[`error`]**: the error taxonomy and its failure categories.
//! * **[`network`]**: interface enumeration and address extraction.
//! * **[`process`]**: the port through which external commands are executed.

pub mod config;
pub mod error;
pub mod network;
pub mod process;
