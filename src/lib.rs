//! # Config Backup Library
//!
//! Core functionality for backing up network device configurations from an
//! inventory platform into a local, optionally git-tracked, folder. It is
//! used by the `config-backup` command-line tool.
//!
//! ## Pipeline
//!
//! A backup run is a single linear pass:
//!
//! 1. **Settings (`config`)**: read connection settings from the
//!    environment into one struct, passed by reference to every stage.
//! 2. **Filter (`filter`)**: validate the JSON device filter before any
//!    request is made.
//! 3. **Client (`client`)**: authenticated HTTP client for the platform's
//!    table API — device inventory and stored configurations.
//! 4. **Destination (`dest`)**: folder layout, backup filenames, and
//!    configuration persistence.
//! 5. **Git (`git`)**: snapshot the folder with the system git binary;
//!    commit outcomes are an explicit committed / no-changes / failed
//!    tri-state.
//!
//! Logging goes through the `log` facade to a rotating file (`logging`).
//! There is no concurrency: one process, one pass over the device list.

pub mod client;
pub mod config;
pub mod dest;
pub mod error;
pub mod filter;
pub mod git;
pub mod logging;

#[cfg(test)]
mod filename_proptest;
