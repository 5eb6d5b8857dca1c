//! Functionality for `crm-cli` user credentials.
use super::hashing::hashed::{Hashed, IntoHashed};

/// A `crm-cli` user as it is written to the `user` table: a username and the SHA-224 digest of
/// the password. The plaintext password is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    hashed_password: Hashed,
}
impl User {
    /// Create a new [User] from a username and a plaintext password.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            hashed_password: password.into_hashed(),
        }
    }

    /// Get the `username` of this [User].
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the `hashed_password` of this [User].
    pub fn hashed_password(&self) -> &Hashed {
        &self.hashed_password
    }
}
