//! Support records: who handled a support interaction, when, and its status.
use std::fmt;

use serde::Serialize;

/// The fields of a support record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupport {
    ticket_manager: String,
    ticket_date: String,
    ticket_status: String,
}
impl NewSupport {
    /// Create a new [NewSupport].
    pub fn new<S>(ticket_manager: S, ticket_date: S, ticket_status: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            ticket_manager: ticket_manager.into(),
            ticket_date: ticket_date.into(),
            ticket_status: ticket_status.into(),
        }
    }

    /// Break this [NewSupport] into its fields, in column order.
    pub fn into_fields(self) -> [String; 3] {
        [self.ticket_manager, self.ticket_date, self.ticket_status]
    }
}

/// A row of the `support` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Support {
    support_id: i64,
    ticket_manager: String,
    ticket_date: String,
    ticket_status: String,
}
impl Support {
    /// Create a [Support] from its fields.
    pub fn from_fields(
        support_id: i64,
        ticket_manager: String,
        ticket_date: String,
        ticket_status: String,
    ) -> Self {
        Self {
            support_id,
            ticket_manager,
            ticket_date,
            ticket_status,
        }
    }

    /// Get the `support_id` of this [Support].
    pub fn support_id(&self) -> i64 {
        self.support_id
    }

    /// Get the `ticket_manager` of this [Support].
    pub fn ticket_manager(&self) -> &str {
        &self.ticket_manager
    }

    /// Get the `ticket_date` of this [Support].
    pub fn ticket_date(&self) -> &str {
        &self.ticket_date
    }

    /// Get the `ticket_status` of this [Support].
    pub fn ticket_status(&self) -> &str {
        &self.ticket_status
    }
}
impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "support_id: {}, ticket_manager: {}, ticket_date: {}, ticket_status: {}",
            self.support_id, self.ticket_manager, self.ticket_date, self.ticket_status
        )
    }
}
