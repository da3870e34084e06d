use crate::utils::error::{PaymentError, ReservationError};
use std::sync::Arc;

/// Takes payment from an account. Implementations own their own failure channel.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(
        &self,
        account_id: i64,
        total_amount_to_pay: u64,
    ) -> std::result::Result<(), PaymentError>;
}

/// Reserves seats for an account.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(
        &self,
        account_id: i64,
        total_seats_to_allocate: u32,
    ) -> std::result::Result<(), ReservationError>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u64) -> std::result::Result<(), PaymentError> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u64) -> std::result::Result<(), PaymentError> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u64) -> std::result::Result<(), PaymentError> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: i64, total_seats_to_allocate: u32) -> std::result::Result<(), ReservationError> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: i64, total_seats_to_allocate: u32) -> std::result::Result<(), ReservationError> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: i64, total_seats_to_allocate: u32) -> std::result::Result<(), ReservationError> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}
