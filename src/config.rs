//! Functionality related to user configuration.
use std::{fs, io::ErrorKind};

use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::eyre;
use serde::Deserialize;
use tracing::debug;

use crate::utils;

const CONFIG_FILE_NAME: &str = "config.toml";

/// [Config] represents the values configurable by the user. Every field is optional in
/// `config.toml`; command-line flags take priority over all of them.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Location of the SQLite database. Defaults to `crm.db` in the data directory.
    pub database_path: Option<Utf8PathBuf>,
    /// Directory CSV exports are written to.
    pub export_dir: Utf8PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}
impl Config {
    /// Load the [Config] from `config.toml` in the config directory.
    pub fn load() -> eyre::Result<Self> {
        Self::load_from(utils::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the [Config] from the given file. A missing file gives the default [Config].
    pub fn load_from<P>(path: P) -> eyre::Result<Self>
    where
        P: AsRef<Utf8Path>,
    {
        let config_file_path = path.as_ref();
        let config_file_content = match fs::read_to_string(config_file_path) {
            Ok(file_content) => file_content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %config_file_path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                return Err(eyre::eyre!(
                    "ERROR: Permission denied for config file at path \"{}\".",
                    config_file_path
                ))
            }
            Err(err) => return Err(eyre::eyre!("ERROR: {}", err)),
        };

        Self::from_toml_str(&config_file_content)
    }

    /// Parse a [Config] from TOML text.
    pub fn from_toml_str(content: &str) -> eyre::Result<Self> {
        match toml::from_str(content) {
            Ok(config) => Ok(config),
            Err(err) => Err(eyre::eyre!(err)),
        }
    }

    /// The configured database path, or the default one in the data directory.
    pub fn database_path(&self) -> eyre::Result<Utf8PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => utils::db_path(),
        }
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            export_dir: Utf8PathBuf::from("."),
            log_filter: String::from("info"),
        }
    }
}
