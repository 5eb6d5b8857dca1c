//! All saving, loading, and exporting of `crm-cli` data is handled through here.
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

mod database;
mod database_traits;
mod export;
mod sql_schemas;
mod sql_statements;

use super::{
    customer::{Customer, NewCustomer},
    hashing::hashed::{Hashed, IntoHashed},
    product::{NewProduct, Product},
    support::{NewSupport, Support},
    ticket::{NewTicket, Ticket},
    user::User,
};
use crate::error::Result;
pub use database::{Database, Table};
pub use database_traits::{IntoDatabase, TryFromDatabase};
use sql_statements::SELECT_CUSTOMERS_BY_PAYMENT_TYPE;

/// The [Vault] is responsible for all saving, loading, and exporting of `crm-cli` data. It owns
/// the [Database] connection and the directory exports are written to.
///
/// There is exactly one [Vault] per session, passed explicitly to whatever needs storage. The
/// connection is released by [Vault::close] or, failing that, when the [Vault] is dropped.
#[derive(Debug)]
pub struct Vault {
    database: Database,
    export_dir: Utf8PathBuf,
}
impl Vault {
    /// Connect to this [Vault]. The database file is created if it does not exist yet.
    ///
    /// The export directory is not touched until something is exported.
    pub fn connect<P, Q>(database_path: P, export_dir: Q) -> Result<Self>
    where
        P: AsRef<Utf8Path>,
        Q: AsRef<Utf8Path>,
    {
        let export_dir = export_dir.as_ref();
        let database = Database::connect(database_path.as_ref())?;
        info!(database = %database.path(), %export_dir, "vault connected");

        Ok(Self {
            database,
            export_dir: export_dir.to_path_buf(),
        })
    }

    /// Open a [Vault] backed by a transient in-memory database.
    pub fn open_in_memory<P>(export_dir: P) -> Result<Self>
    where
        P: AsRef<Utf8Path>,
    {
        Ok(Self {
            database: Database::open_in_memory()?,
            export_dir: export_dir.as_ref().to_path_buf(),
        })
    }

    /// Create any missing tables. [Vault::connect] already does this once.
    pub fn ensure_schema(&self) -> Result<()> {
        self.database.ensure_schema()
    }

    /// Get the [Database] behind this [Vault].
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the directory exports are written to by default.
    pub fn export_dir(&self) -> &Utf8Path {
        &self.export_dir
    }

    /// Default export path of the given [Table].
    pub fn export_path(&self, table: Table) -> Utf8PathBuf {
        self.export_dir.join(table.export_file_name())
    }

    // USERS

    /// Check a username and password against the `user` table.
    ///
    /// Unknown usernames and wrong passwords are both just `false`.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let authenticated = match self.database.select_password_hash(username)? {
            Some(stored_hash) => match Hashed::from_hex(&stored_hash) {
                Some(hashed_password) => password.check_match(&hashed_password),
                None => {
                    warn!(username, "stored password digest is malformed");
                    false
                }
            },
            None => false,
        };
        if authenticated {
            info!(username, "login succeeded");
        } else {
            warn!(username, "login failed");
        }
        Ok(authenticated)
    }

    /// Hash the password and add a new user. Fails if the username is taken.
    pub fn add_user(&self, username: &str, password: &str) -> Result<i64> {
        self.database.insert_entry(User::new(username, password))
    }

    // RECORD WRITER

    /// Add a customer, returning its `customer_id`.
    pub fn add_customer(
        &self,
        contact_no: &str,
        purchase_hist: &str,
        ticket_hist: &str,
        payment_type: &str,
    ) -> Result<i64> {
        self.database.insert_entry(NewCustomer::new(
            contact_no,
            purchase_hist,
            ticket_hist,
            payment_type,
        ))
    }

    /// Add a product, returning its `product_id`.
    pub fn add_product(
        &self,
        product_type: &str,
        product_date: &str,
        product_rating: &str,
    ) -> Result<i64> {
        self.database
            .insert_entry(NewProduct::new(product_type, product_date, product_rating))
    }

    /// Add a support record, returning its `support_id`.
    pub fn add_support(
        &self,
        ticket_manager: &str,
        ticket_date: &str,
        ticket_status: &str,
    ) -> Result<i64> {
        self.database
            .insert_entry(NewSupport::new(ticket_manager, ticket_date, ticket_status))
    }

    /// Add a ticket, returning its `ticket_id`.
    pub fn add_ticket(
        &self,
        ticket_reason: &str,
        ticket_date: &str,
        ticket_status: &str,
    ) -> Result<i64> {
        self.database
            .insert_entry(NewTicket::new(ticket_reason, ticket_date, ticket_status))
    }

    // RECORD READER
    //
    // Rows come back in SQLite's default order, which is insertion order in practice. Nothing
    // guarantees it.

    /// All customers.
    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        self.database.select_all()
    }

    /// All products.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.database.select_all()
    }

    /// All support records.
    pub fn list_support(&self) -> Result<Vec<Support>> {
        self.database.select_all()
    }

    /// All tickets.
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.database.select_all()
    }

    /// Customers whose `payment_type` is exactly `payment_type` (case-sensitive). No match is an
    /// empty [Vec], not an error.
    pub fn find_customers_by_payment_type(&self, payment_type: &str) -> Result<Vec<Customer>> {
        self.database
            .select_where(SELECT_CUSTOMERS_BY_PAYMENT_TYPE, [payment_type])
    }

    // EXPORTER

    /// Export the `customer` table to a CSV file at `path`. Return the number of rows written.
    pub fn export_customers_csv<P: AsRef<Utf8Path>>(&self, path: P) -> Result<usize> {
        export::export_table::<Customer, _>(&self.database, path)
    }

    /// Export the `product` table to a CSV file at `path`. Return the number of rows written.
    pub fn export_products_csv<P: AsRef<Utf8Path>>(&self, path: P) -> Result<usize> {
        export::export_table::<Product, _>(&self.database, path)
    }

    /// Export the `support` table to a CSV file at `path`. Return the number of rows written.
    pub fn export_support_csv<P: AsRef<Utf8Path>>(&self, path: P) -> Result<usize> {
        export::export_table::<Support, _>(&self.database, path)
    }

    /// Export the `ticket` table to a CSV file at `path`. Return the number of rows written.
    pub fn export_tickets_csv<P: AsRef<Utf8Path>>(&self, path: P) -> Result<usize> {
        export::export_table::<Ticket, _>(&self.database, path)
    }

    /// Release the database connection.
    pub fn close(self) -> Result<()> {
        info!("vault closed");
        self.database.close()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_vault() -> Vault {
        Vault::open_in_memory(".").unwrap()
    }

    #[test]
    fn authenticate_checks_digest() {
        let vault = test_vault();
        vault.add_user("Mister Test", "open sesame!").unwrap();

        assert!(vault.authenticate("Mister Test", "open sesame!").unwrap());
        assert!(!vault.authenticate("Mister Test", "open sesame?").unwrap());
        assert!(!vault.authenticate("Mister Test", "").unwrap());
        assert!(!vault.authenticate("Mister Toast", "open sesame!").unwrap());
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let vault = test_vault();
        vault.add_user("admin", "pw").unwrap();
        assert!(!vault.authenticate("Admin", "pw").unwrap());
    }

    #[test]
    fn customer_round_trip() {
        let vault = test_vault();
        let id = vault
            .add_customer("555-0100", "3 orders", "1 ticket", "cash")
            .unwrap();

        let customers = vault.list_customers().unwrap();
        assert_eq!(
            customers,
            [Customer::from_fields(
                id,
                String::from("555-0100"),
                String::from("3 orders"),
                String::from("1 ticket"),
                String::from("cash"),
            )]
        );
    }

    #[test]
    fn filter_by_payment_type() {
        let vault = test_vault();
        let first = vault.add_customer("1", "", "", "cash").unwrap();
        vault.add_customer("2", "", "", "credit card").unwrap();
        let third = vault.add_customer("3", "", "", "cash").unwrap();

        let cash: Vec<i64> = vault
            .find_customers_by_payment_type("cash")
            .unwrap()
            .iter()
            .map(Customer::customer_id)
            .collect();
        assert_eq!(cash, [first, third]);

        assert!(vault
            .find_customers_by_payment_type("Cash")
            .unwrap()
            .is_empty());
        assert!(vault
            .find_customers_by_payment_type("nonexistent")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn each_table_lists_its_own_rows() {
        let vault = test_vault();
        vault.add_product("gadget", "2024-03-01", "4").unwrap();
        vault.add_support("Dana", "2024-03-02", "open").unwrap();
        vault.add_support("Lee", "2024-03-03", "closed").unwrap();
        vault.add_ticket("broken gadget", "2024-03-02", "open").unwrap();

        assert_eq!(vault.list_customers().unwrap().len(), 0);
        assert_eq!(vault.list_products().unwrap().len(), 1);
        assert_eq!(vault.list_support().unwrap().len(), 2);

        let tickets = vault.list_tickets().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].ticket_reason(), "broken gadget");
        assert_eq!(tickets[0].ticket_status(), "open");
    }

    #[test]
    fn export_path_uses_table_name() {
        let vault = Vault::open_in_memory("exports").unwrap();
        assert_eq!(
            vault.export_path(Table::Support),
            Utf8PathBuf::from("exports/support_data.csv")
        );
    }
}
