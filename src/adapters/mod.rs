// Adapters layer: concrete implementations of the payment and reservation ports.

pub mod logging;

pub use logging::{LoggingPaymentService, LoggingSeatReservationService};
