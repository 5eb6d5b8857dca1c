//! Ticket records. A ticket is one support interaction opened for a reason.
use std::fmt;

use serde::Serialize;

/// The fields of a ticket that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    ticket_reason: String,
    ticket_date: String,
    ticket_status: String,
}
impl NewTicket {
    /// Create a new [NewTicket].
    pub fn new<S>(ticket_reason: S, ticket_date: S, ticket_status: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            ticket_reason: ticket_reason.into(),
            ticket_date: ticket_date.into(),
            ticket_status: ticket_status.into(),
        }
    }

    /// Break this [NewTicket] into its fields, in column order.
    pub fn into_fields(self) -> [String; 3] {
        [self.ticket_reason, self.ticket_date, self.ticket_status]
    }
}

/// A row of the `ticket` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    ticket_id: i64,
    ticket_reason: String,
    ticket_date: String,
    ticket_status: String,
}
impl Ticket {
    /// Create a [Ticket] from its fields.
    pub fn from_fields(
        ticket_id: i64,
        ticket_reason: String,
        ticket_date: String,
        ticket_status: String,
    ) -> Self {
        Self {
            ticket_id,
            ticket_reason,
            ticket_date,
            ticket_status,
        }
    }

    /// Get the `ticket_id` of this [Ticket].
    pub fn ticket_id(&self) -> i64 {
        self.ticket_id
    }

    /// Get the `ticket_reason` of this [Ticket].
    pub fn ticket_reason(&self) -> &str {
        &self.ticket_reason
    }

    /// Get the `ticket_date` of this [Ticket].
    pub fn ticket_date(&self) -> &str {
        &self.ticket_date
    }

    /// Get the `ticket_status` of this [Ticket].
    pub fn ticket_status(&self) -> &str {
        &self.ticket_status
    }
}
impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ticket_id: {}, ticket_reason: {}, ticket_date: {}, ticket_status: {}",
            self.ticket_id, self.ticket_reason, self.ticket_date, self.ticket_status
        )
    }
}
