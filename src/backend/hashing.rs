//! One-way password digests.
pub mod hashed;
pub mod traits;
