//! Customer records.
use std::fmt;

use serde::Serialize;

/// The fields of a customer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    contact_no: String,
    purchase_hist: String,
    ticket_hist: String,
    payment_type: String,
}
impl NewCustomer {
    /// Create a new [NewCustomer]. All fields are free text.
    pub fn new<S>(contact_no: S, purchase_hist: S, ticket_hist: S, payment_type: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            contact_no: contact_no.into(),
            purchase_hist: purchase_hist.into(),
            ticket_hist: ticket_hist.into(),
            payment_type: payment_type.into(),
        }
    }

    /// Break this [NewCustomer] into its fields, in column order.
    pub fn into_fields(self) -> [String; 4] {
        [
            self.contact_no,
            self.purchase_hist,
            self.ticket_hist,
            self.payment_type,
        ]
    }
}

/// A row of the `customer` table.
///
/// Field order matches the column order; CSV export relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    customer_id: i64,
    contact_no: String,
    purchase_hist: String,
    ticket_hist: String,
    payment_type: String,
}
impl Customer {
    /// Create a [Customer] from its fields.
    pub fn from_fields(
        customer_id: i64,
        contact_no: String,
        purchase_hist: String,
        ticket_hist: String,
        payment_type: String,
    ) -> Self {
        Self {
            customer_id,
            contact_no,
            purchase_hist,
            ticket_hist,
            payment_type,
        }
    }

    /// Get the `customer_id` of this [Customer].
    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Get the `contact_no` of this [Customer].
    pub fn contact_no(&self) -> &str {
        &self.contact_no
    }

    /// Get the `purchase_hist` of this [Customer].
    pub fn purchase_hist(&self) -> &str {
        &self.purchase_hist
    }

    /// Get the `ticket_hist` of this [Customer].
    pub fn ticket_hist(&self) -> &str {
        &self.ticket_hist
    }

    /// Get the `payment_type` of this [Customer].
    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }
}
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "customer_id: {}, contact_no: {}, purchase_hist: {}, ticket_hist: {}, payment_type: {}",
            self.customer_id, self.contact_no, self.purchase_hist, self.ticket_hist, self.payment_type
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_lists_every_column() {
        let customer = Customer::from_fields(
            7,
            String::from("555-0100"),
            String::from("3 orders"),
            String::from("1 ticket"),
            String::from("cash"),
        );
        assert_eq!(
            customer.to_string(),
            "customer_id: 7, contact_no: 555-0100, purchase_hist: 3 orders, ticket_hist: 1 ticket, payment_type: cash"
        );
    }
}
