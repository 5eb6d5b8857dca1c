// Common functionality for integration tests
#![allow(dead_code)]
use std::{env, fs, process};

use camino::Utf8PathBuf;

/// A scratch directory unique to this test binary and `name`, emptied on every call.
pub fn get_test_dir(name: &str) -> Utf8PathBuf {
    let mut dir = Utf8PathBuf::from_path_buf(env::temp_dir()).expect("temp dir is not UTF-8");
    dir.push(format!("crm-cli-tests-{}", process::id()));
    dir.push(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed");
    dir
}

/// Path to a fresh (nonexistent) database file for the test `name`.
pub fn reset_test_db(name: &str) -> Utf8PathBuf {
    get_test_dir(name).join("crm-test.db")
}
