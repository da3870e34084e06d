use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of ticket on sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    /// Price of a single ticket in whole GBP.
    pub const fn unit_price(self) -> u32 {
        match self {
            TicketType::Infant => 0,
            TicketType::Child => 10,
            TicketType::Adult => 20,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown ticket type: {} (expected INFANT, CHILD or ADULT)", s))
    }
}

/// One (type, count) entry of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// `ADULT=2` style shorthand used on the command line.
impl FromStr for TicketTypeRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ticket_type, count) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected TYPE=COUNT, got: {}", s))?;
        let ticket_type = ticket_type.parse::<TicketType>()?;
        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid ticket count '{}': {}", count.trim(), e))?;
        Ok(Self::new(ticket_type, count))
    }
}

/// Totals computed for a validated request. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub account_id: i64,
    pub total_tickets: u32,
    pub total_price: u64,
}
