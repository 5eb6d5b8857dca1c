//! Parse command-line arguments for `crm`.
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::utils;

/// The command-line interface argument parser.
#[derive(Parser, Debug)]
#[command(name = "crm")]
#[command(version = utils::info())]
#[command(about = "Record and look up customers, products, support records and tickets.")]
pub struct Cli {
    /// SQLite database file. Overrides the config file.
    #[arg(short, long, global = true)]
    pub database: Option<Utf8PathBuf>,
    /// Directory CSV exports are written to. Overrides the config file.
    #[arg(short, long, global = true)]
    pub export_dir: Option<Utf8PathBuf>,
    /// Config file to read instead of the default one.
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Without a command, log in and open the menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// All the possible commands the user can give `crm`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a user. The password is read without echo and asked for twice.
    #[command(alias = "user")]
    AddUser {
        /// Username of the new user.
        username: String,
    },
}
