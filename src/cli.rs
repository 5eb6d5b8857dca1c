//! Functionality related to the command line.
pub mod arg_parser;
pub mod menu;
pub mod processes;
pub mod prompt;

pub use arg_parser::{Cli, Command};
pub use menu::Menu;
pub use prompt::{Prompt, Scripted, Terminal};
