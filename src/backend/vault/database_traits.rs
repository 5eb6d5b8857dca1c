//! These traits determine how record types are converted into and out of rows of the `crm-cli`
//! database.
use rusqlite::Row;

use super::{
    super::{
        customer::{Customer, NewCustomer},
        product::{NewProduct, Product},
        support::{NewSupport, Support},
        ticket::{NewTicket, Ticket},
        user::User,
    },
    database::Table,
    sql_statements::*,
};

/// This trait defines how the given struct gets converted into an array of strings for insertion
/// into the database. The array holds every column except the auto-assigned identifier, in
/// column order.
pub trait IntoDatabase {
    /// The column values, one string per column.
    type FixedSizeStringArray;

    /// The table this struct is inserted into.
    const TABLE: Table;

    /// This function determines how the struct gets converted into the database format.
    fn into_database(self) -> Self::FixedSizeStringArray;
}

// Implementations
impl IntoDatabase for User {
    type FixedSizeStringArray = [String; 2];
    const TABLE: Table = Table::User;
    fn into_database(self) -> Self::FixedSizeStringArray {
        [
            self.username().to_owned(),
            self.hashed_password().to_hex(),
        ]
    }
}
impl IntoDatabase for NewCustomer {
    type FixedSizeStringArray = [String; 4];
    const TABLE: Table = Table::Customer;
    fn into_database(self) -> Self::FixedSizeStringArray {
        self.into_fields()
    }
}
impl IntoDatabase for NewProduct {
    type FixedSizeStringArray = [String; 3];
    const TABLE: Table = Table::Product;
    fn into_database(self) -> Self::FixedSizeStringArray {
        self.into_fields()
    }
}
impl IntoDatabase for NewSupport {
    type FixedSizeStringArray = [String; 3];
    const TABLE: Table = Table::Support;
    fn into_database(self) -> Self::FixedSizeStringArray {
        self.into_fields()
    }
}
impl IntoDatabase for NewTicket {
    type FixedSizeStringArray = [String; 3];
    const TABLE: Table = Table::Ticket;
    fn into_database(self) -> Self::FixedSizeStringArray {
        self.into_fields()
    }
}

/// This trait defines how the given struct gets built from a row returned by the database.
pub trait TryFromDatabase {
    /// The table this struct is read from.
    const TABLE: Table;

    /// Statement selecting every row of the table, columns in the order
    /// [TryFromDatabase::try_from_database] reads them.
    const SELECT_ALL: &'static str;

    /// This function determines how the struct gets read from the database format.
    fn try_from_database(row: &Row) -> rusqlite::Result<Self>
    where
        Self: Sized;
}

// Implementations
impl TryFromDatabase for Customer {
    const TABLE: Table = Table::Customer;
    const SELECT_ALL: &'static str = SELECT_ALL_CUSTOMERS;

    fn try_from_database(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self::from_fields(
            row.get(0)?,
            text_column(row, 1)?,
            text_column(row, 2)?,
            text_column(row, 3)?,
            text_column(row, 4)?,
        ))
    }
}
impl TryFromDatabase for Product {
    const TABLE: Table = Table::Product;
    const SELECT_ALL: &'static str = SELECT_ALL_PRODUCTS;

    fn try_from_database(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self::from_fields(
            row.get(0)?,
            text_column(row, 1)?,
            text_column(row, 2)?,
            text_column(row, 3)?,
        ))
    }
}
impl TryFromDatabase for Support {
    const TABLE: Table = Table::Support;
    const SELECT_ALL: &'static str = SELECT_ALL_SUPPORT;

    fn try_from_database(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self::from_fields(
            row.get(0)?,
            text_column(row, 1)?,
            text_column(row, 2)?,
            text_column(row, 3)?,
        ))
    }
}
impl TryFromDatabase for Ticket {
    const TABLE: Table = Table::Ticket;
    const SELECT_ALL: &'static str = SELECT_ALL_TICKETS;

    fn try_from_database(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self::from_fields(
            row.get(0)?,
            text_column(row, 1)?,
            text_column(row, 2)?,
            text_column(row, 3)?,
        ))
    }
}

// Helper function to read a nullable free-text column. NULL reads as an empty string.
fn text_column(row: &Row, index: usize) -> rusqlite::Result<String> {
    Ok(row.get::<usize, Option<String>>(index)?.unwrap_or_default())
}
