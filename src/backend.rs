//! All backend functionality.
mod customer;
mod hashing;
mod product;
mod support;
mod ticket;
mod user;
mod vault;

// Re-imports.
pub use customer::{Customer, NewCustomer};
pub use hashing::hashed::{Hash, Hashed, IntoHashed, DIGEST_LEN};
pub use product::{NewProduct, Product};
pub use support::{NewSupport, Support};
pub use ticket::{NewTicket, Ticket};
pub use user::User;
pub use vault::{Database, IntoDatabase, Table, TryFromDatabase, Vault};
