//! Functionality related to exporting tables to CSV files.
use std::fs::{self, metadata};

use camino::Utf8Path;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use super::{database::Database, database_traits::TryFromDatabase};
use crate::error::{Error, Result};

/// Ensure that a given path exists, is a directory, and is not read-only.
pub fn verify_writeable_dir<P>(path: P) -> Result<()>
where
    P: AsRef<Utf8Path>,
{
    // Check that the path is valid and is a directory.
    let metadata = metadata(path.as_ref())?;
    if !metadata.is_dir() {
        return Err(Error::StorageError(format!(
            "{:?} is not a directory.",
            path.as_ref()
        )));
    }

    // Ensure that the directory is not read-only.
    let permissions = metadata.permissions();
    if permissions.readonly() {
        return Err(Error::StorageError(format!(
            "{:?} is read-only.",
            path.as_ref()
        )));
    }

    Ok(())
}

/// Write every row of the table backing `T` to a CSV file at `path`, header first. Any existing
/// file at `path` is overwritten. An empty table still gets its header row.
///
/// The directory holding `path` is created if it is missing.
///
/// Return the number of data rows written.
pub fn export_table<T, P>(database: &Database, path: P) -> Result<usize>
where
    T: TryFromDatabase + Serialize,
    P: AsRef<Utf8Path>,
{
    let path = path.as_ref();
    let directory = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or(Utf8Path::new("."));
    fs::create_dir_all(directory).map_err(|err| {
        Error::StorageError(format!("Cannot create export directory \"{directory}\": {err}"))
    })?;
    verify_writeable_dir(directory)?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| {
            Error::StorageError(format!("Cannot write export file \"{path}\": {err}"))
        })?;

    writer.write_record(T::TABLE.columns())?;
    let row_count = database.stream_entries(T::SELECT_ALL, [], |entry: T| {
        writer.serialize(entry)?;
        Ok(())
    })?;
    writer.flush()?;

    info!(table = T::TABLE.name(), %path, row_count, "exported table");
    Ok(row_count)
}
