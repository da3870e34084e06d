use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::utils::error::{PaymentError, ReservationError};

/// Payment service that only records the charge in the log. Used by the CLI
/// where no real payment gateway is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u64) -> Result<(), PaymentError> {
        tracing::info!(account_id, amount = total_amount_to_pay, "💳 Charging account");
        Ok(())
    }
}

/// Seat reservation service that only records the allocation in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: i64, total_seats_to_allocate: u32) -> Result<(), ReservationError> {
        tracing::info!(account_id, seats = total_seats_to_allocate, "🎟️ Reserving seats");
        Ok(())
    }
}
