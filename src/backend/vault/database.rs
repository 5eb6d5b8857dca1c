use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use rusqlite::{Connection, OpenFlags, Params};
use tracing::debug;

use super::{database_traits::*, sql_schemas::*, sql_statements::*};
use crate::error::Result;

/// All the tables stored in the [Database]. Used to determine [Database] function behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Login credentials.
    User,
    /// Customers.
    Customer,
    /// Products.
    Product,
    /// Support records.
    Support,
    /// Tickets.
    Ticket,
}
impl Table {
    /// Every table, in creation order.
    pub const ALL: [Table; 5] = [
        Table::User,
        Table::Product,
        Table::Support,
        Table::Customer,
        Table::Ticket,
    ];

    /// The SQL name of this table.
    pub fn name(&self) -> &'static str {
        match self {
            Table::User => "user",
            Table::Customer => "customer",
            Table::Product => "product",
            Table::Support => "support",
            Table::Ticket => "ticket",
        }
    }

    /// Column names of this table, in order. Also used as the CSV export header.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::User => &["id", "username", "password_hash"],
            Table::Customer => &[
                "customer_id",
                "contact_no",
                "purchase_hist",
                "ticket_hist",
                "payment_type",
            ],
            Table::Product => &["product_id", "product_type", "product_date", "product_rating"],
            Table::Support => &["support_id", "ticket_manager", "ticket_date", "ticket_status"],
            Table::Ticket => &["ticket_id", "ticket_reason", "ticket_date", "ticket_status"],
        }
    }

    /// Default file name when this table is exported to CSV.
    pub fn export_file_name(&self) -> String {
        format!("{}_data.csv", self.name())
    }

    fn create_statement(&self) -> &'static str {
        match self {
            Table::User => CREATE_USER,
            Table::Customer => CREATE_CUSTOMER,
            Table::Product => CREATE_PRODUCT,
            Table::Support => CREATE_SUPPORT,
            Table::Ticket => CREATE_TICKET,
        }
    }

    fn insert_statement(&self) -> &'static str {
        match self {
            Table::User => INSERT_USER,
            Table::Customer => INSERT_CUSTOMER,
            Table::Product => INSERT_PRODUCT,
            Table::Support => INSERT_SUPPORT,
            Table::Ticket => INSERT_TICKET,
        }
    }
}

/// Connection interface to the database. Owns the single SQLite connection of the process; it is
/// released when the [Database] is closed or dropped.
#[derive(Debug)]
pub struct Database {
    /// Path to .db file.
    path: Utf8PathBuf,
    /// SQLite database connection.
    connection: Connection,
}
impl Database {
    /// Open a connection to the database at the given path, creating the file (and its parent
    /// directory) if needed, then make sure every table exists.
    pub fn connect<P>(path: P) -> Result<Self>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let database = Self {
            path: path.to_path_buf(),
            connection,
        };
        database.ensure_schema()?;
        debug!(path = %database.path, "connected to database");

        Ok(database)
    }

    /// Open a transient database that lives only as long as the returned [Database].
    pub fn open_in_memory() -> Result<Self> {
        let database = Self {
            path: Utf8PathBuf::from(":memory:"),
            connection: Connection::open_in_memory()?,
        };
        database.ensure_schema()?;
        Ok(database)
    }

    /// Create every table iff it doesn't exist. Safe to call any number of times.
    pub fn ensure_schema(&self) -> Result<()> {
        for table in Table::ALL {
            self.connection.execute(table.create_statement(), ())?;
        }
        debug!("schema ensured");
        Ok(())
    }

    /// Names of all the tables currently in the database.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut statement = self.connection.prepare(SELECT_TABLE_NAMES)?;
        let names = statement
            .query_map([], |row| row.get::<usize, String>(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// Insert a specific entry into the matching table, returning the identifier SQLite assigned
    /// to the new row.
    ///
    /// Return [Err] if there is a conflict.
    pub fn insert_entry<T>(&self, entry: T) -> Result<i64>
    where
        T: IntoDatabase,
        T::FixedSizeStringArray: Params,
    {
        self.connection
            .execute(T::TABLE.insert_statement(), entry.into_database())?;
        let id = self.connection.last_insert_rowid();
        debug!(table = T::TABLE.name(), id, "inserted row");
        Ok(id)
    }

    /// Run `sql` and hand each resulting row to `f` as it is read, without collecting them.
    ///
    /// Return the number of rows visited.
    pub fn stream_entries<T, P, F>(&self, sql: &str, params: P, mut f: F) -> Result<usize>
    where
        T: TryFromDatabase,
        P: Params,
        F: FnMut(T) -> Result<()>,
    {
        let mut statement = self.connection.prepare(sql)?;
        let rows = statement.query_map(params, |row| T::try_from_database(row))?;

        let mut count = 0;
        for row in rows {
            f(row?)?;
            count += 1;
        }
        Ok(count)
    }

    /// Retrieve every entry of the table backing `T`, in storage order.
    pub fn select_all<T>(&self) -> Result<Vec<T>>
    where
        T: TryFromDatabase,
    {
        self.select_where(T::SELECT_ALL, [])
    }

    /// Retrieve every entry matched by `sql`.
    pub fn select_where<T, P>(&self, sql: &str, params: P) -> Result<Vec<T>>
    where
        T: TryFromDatabase,
        P: Params,
    {
        let mut entries = Vec::new();
        self.stream_entries(sql, params, |entry| {
            entries.push(entry);
            Ok(())
        })?;
        Ok(entries)
    }

    /// Retrieve the stored password digest of a user.
    ///
    /// Return [Ok<None>] if no user with that username exists in the database.
    pub fn select_password_hash(&self, username: &str) -> Result<Option<String>> {
        let mut statement = self.connection.prepare(SELECT_USER_PASSWORD_HASH)?;
        let query_result = statement.query_row([username], |row| row.get::<usize, String>(0));
        match query_result {
            Ok(password_hash) => Ok(Some(password_hash)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Get the path at which this [Database] is located.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.connection.close().map_err(|(_, err)| err.into())
    }
}
