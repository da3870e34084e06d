pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LoggingPaymentService, LoggingSeatReservationService};
pub use config::request_file::PurchaseRequestFile;
pub use core::ticket_service::TicketService;
pub use domain::model::{PurchaseSummary, TicketType, TicketTypeRequest};
pub use domain::ports::{SeatReservationService, TicketPaymentService};
pub use utils::error::{PaymentError, ReservationError, Result, TicketError};
