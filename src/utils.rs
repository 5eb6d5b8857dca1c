//! General utilities used by `crm-cli`.
use std::{env, fs, sync::Mutex};

use camino::Utf8PathBuf;
use color_eyre::eyre::{self, eyre};
use directories::ProjectDirs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// String displaying the package version of `crm-cli`.
const VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");

/// File name of the SQLite database inside the data directory.
const DB_FILE_NAME: &str = "crm.db";

/// Get the version and directories of `crm-cli`.
pub fn info() -> String {
    let display_dir = |dir: eyre::Result<Utf8PathBuf>| match dir {
        Ok(dir) => dir.to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    format!(
        "\
{VERSION_MESSAGE}

Data Directory: {}
Config Directory: {}",
        display_dir(data_dir()),
        display_dir(config_dir()),
    )
}

/// Get the directory where `crm-cli` program data is stored.
pub fn data_dir() -> eyre::Result<Utf8PathBuf> {
    if let Some(utf8_path_buf) = data_dir_env_var() {
        // Prioritise user-set path.
        Ok(utf8_path_buf)
    } else if let Some(proj_dirs) = project_directory() {
        // Next priority: XDG-standardised local dir.
        match Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()) {
            Ok(utf8_path_buf) => Ok(utf8_path_buf),
            Err(path_buf) => Err(eyre!(
                "Path to data directory {:?} contains non-UTF-8 content.",
                path_buf
            )),
        }
    } else {
        // Last priority: .data folder relative to CWD
        Ok(Utf8PathBuf::from(".").join(".data"))
    }
}

/// Get the directory where `crm-cli` configuration data is stored.
pub fn config_dir() -> eyre::Result<Utf8PathBuf> {
    if let Some(utf8_path_buf) = config_dir_env_var() {
        // Prioritise user-set path.
        Ok(utf8_path_buf)
    } else if let Some(proj_dirs) = project_directory() {
        // Next priority: XDG-standardised local dir.
        match Utf8PathBuf::from_path_buf(proj_dirs.config_local_dir().to_path_buf()) {
            Ok(utf8_path_buf) => Ok(utf8_path_buf),
            Err(path_buf) => Err(eyre!(
                "Path to config directory {:?} contains non-UTF-8 content.",
                path_buf
            )),
        }
    } else {
        // Last priority: .config folder relative to CWD
        Ok(Utf8PathBuf::from(".").join(".config"))
    }
}

/// Get the default path of the database file.
pub fn db_path() -> eyre::Result<Utf8PathBuf> {
    Ok(data_dir()?.join(DB_FILE_NAME))
}

/// Get the log file name.
pub fn log_file_name() -> String {
    format!("{}.log", env!("CARGO_PKG_NAME"))
}

/// Send `tracing` output to the log file in the data directory, so it never mixes with the menu.
///
/// `RUST_LOG` takes priority over `default_filter`.
pub fn initialize_logging(default_filter: &str) -> eyre::Result<()> {
    let directory = data_dir()?;
    fs::create_dir_all(&directory)?;
    let log_file = fs::File::options()
        .create(true)
        .append(true)
        .open(directory.join(log_file_name()))?;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

/// Data directory environment variable. Can be set to change the location of the `crm-cli` data
/// directory.
pub fn data_dir_env_var() -> Option<Utf8PathBuf> {
    get_env_var_path("DATA")
}

/// Config directory environment variable. Can be used to change the location of the `crm-cli`
/// config directory.
pub fn config_dir_env_var() -> Option<Utf8PathBuf> {
    get_env_var_path("CONFIG")
}

// Helper function.
fn get_env_var_path(suffix: &str) -> Option<Utf8PathBuf> {
    env::var(format!("{}_{}", crate_name_constant_case(), suffix))
        .ok()
        .map(Utf8PathBuf::from)
}

/// Get the crate name in CONSTANT_CASE.
pub fn crate_name_constant_case() -> String {
    env!("CARGO_CRATE_NAME").to_uppercase()
}

/// Get the directory of this project.
pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn constant_case_name() {
        assert_eq!(crate_name_constant_case(), "CRM_CLI");
    }

    #[test]
    fn log_file_is_named_after_package() {
        assert_eq!(log_file_name(), "crm-cli.log");
    }

    #[test]
    fn db_lives_in_data_dir() {
        let db_path = db_path().unwrap();
        assert_eq!(db_path.file_name(), Some("crm.db"));
        assert_eq!(db_path.parent(), Some(data_dir().unwrap().as_path()));
    }
}
