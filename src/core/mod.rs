pub mod ticket_service;

pub use crate::domain::model::{PurchaseSummary, TicketType, TicketTypeRequest};
pub use crate::domain::ports::{SeatReservationService, TicketPaymentService};
pub use crate::utils::error::Result;
