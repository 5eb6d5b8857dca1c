use std::{io, process::ExitCode};

use clap::Parser;
use color_eyre::eyre;

use crm_cli::{
    backend::Vault,
    cli::{processes, Cli, Command, Terminal},
    config::Config,
    utils,
};

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Err(err) = utils::initialize_logging(&config.log_filter) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let database_path = match args.database {
        Some(path) => path,
        None => config.database_path()?,
    };
    let export_dir = args.export_dir.unwrap_or(config.export_dir);

    // Storage problems here are fatal.
    let vault = Vault::connect(&database_path, &export_dir)?;

    let outcome = match args.command {
        Some(Command::AddUser { username }) => {
            processes::add_user(&vault, &username, &mut Terminal, &mut io::stdout())
                .map(|()| ExitCode::SUCCESS)
        }
        None => processes::session(&vault, Terminal, io::stdout()).map(|logged_in| {
            if logged_in {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
    };

    vault.close()?;
    outcome
}
