//! The errors `crm-cli` can run into while talking to storage or reading menu input, meant to be
//! shown by the menu.
use core::fmt;
use std::io;

/// A list of all the handled `crm-cli` errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Storage failed: unwritable file, missing table, constraint violation, or any other
    /// engine-level or export I/O failure.
    StorageError(String),
    /// Malformed or out-of-range menu selection.
    InputError(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            Error::StorageError(error_as_string) => {
                format!("StorageError: {}", error_as_string)
            }
            Error::InputError(input) => {
                format!("InputError: \"{}\" is not a valid option.", input)
            }
        };
        write!(f, "{}", message)
    }
}
impl std::error::Error for Error {}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::StorageError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::StorageError(err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::StorageError(err.to_string())
    }
}

/// Result type used throughout the `crm-cli` backend.
pub type Result<T> = std::result::Result<T, Error>;
