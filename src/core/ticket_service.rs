use crate::domain::model::{PurchaseSummary, TicketTypeRequest};
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::utils::error::Result;
use crate::utils::validation::{validate_account_id, validate_ticket_requests, validate_total_tickets};

/// Sum of `count` over every entry.
pub fn total_ticket_count(requests: &[TicketTypeRequest]) -> u64 {
    requests.iter().map(|r| u64::from(r.count())).sum()
}

/// Sum of `count * unit price` over every entry.
pub fn total_price(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .map(|r| u64::from(r.count()) * u64::from(r.ticket_type().unit_price()))
        .sum()
}

/// Validates and prices ticket purchases, then hands payment and seat
/// allocation to the external services. Holds no state between calls.
pub struct TicketService<P: TicketPaymentService, R: SeatReservationService> {
    payment_service: P,
    reservation_service: R,
}

impl<P: TicketPaymentService, R: SeatReservationService> TicketService<P, R> {
    pub fn new(payment_service: P, reservation_service: R) -> Self {
        Self {
            payment_service,
            reservation_service,
        }
    }

    /// Runs every purchase rule and prices the request without calling out.
    pub fn quote(&self, account_id: i64, requests: &[TicketTypeRequest]) -> Result<PurchaseSummary> {
        validate_account_id(account_id)?;
        validate_ticket_requests(requests)?;

        let total_tickets = validate_total_tickets(total_ticket_count(requests))?;
        tracing::info!("Request for reservation of {} tickets", total_tickets);

        let total_price = total_price(requests);
        tracing::info!(
            "Total payable amount {} GBP for {} tickets",
            total_price,
            total_tickets
        );

        Ok(PurchaseSummary {
            account_id,
            total_tickets,
            total_price,
        })
    }

    /// Pays for and reserves the requested tickets.
    ///
    /// Nothing is charged or reserved unless every rule passes. Payment is taken
    /// before seats are reserved; failures from either service are returned as-is.
    pub fn purchase_tickets(&self, account_id: i64, requests: &[TicketTypeRequest]) -> Result<()> {
        tracing::info!("Received ticket purchase request for accountId: {}", account_id);

        let summary = self.quote(account_id, requests).inspect_err(|e| {
            tracing::warn!("Invalid ticket request: {}", e);
        })?;

        self.payment_service
            .make_payment(summary.account_id, summary.total_price)?;
        tracing::info!("Payment received");

        self.reservation_service
            .reserve_seat(summary.account_id, summary.total_tickets)?;
        tracing::info!("Reservation confirmed");

        tracing::info!(
            account_id = summary.account_id,
            total_paid = summary.total_price,
            total_tickets = summary.total_tickets,
            "Tickets purchased successfully"
        );
        Ok(())
    }
}
