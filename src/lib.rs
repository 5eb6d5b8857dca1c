//! Modules utilised by `crm-cli`.
//!
//! A single-user, menu-driven customer-relationship store backed by a local SQLite file.
#![warn(missing_docs)]

/// Backend code for `crm-cli`.
pub mod backend;
/// Command line argument parsing and the interactive menu.
pub mod cli;
/// User configuration.
pub mod config;
/// `crm-cli`-specific errors.
pub mod error;
/// General utilities: directories, logging, version info.
pub mod utils;
