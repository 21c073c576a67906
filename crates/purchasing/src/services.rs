//! External collaborators of the purchase processor.
//!
//! Payment and seat reservation live outside this crate. The processor only
//! needs one operation from each; both are assumed to always succeed, so
//! neither returns a result.
//!
//! ## Thread Safety
//!
//! Both traits require `Send + Sync` so a single processor can be shared
//! across threads. Any synchronisation a backend needs is its own business.

use std::sync::Arc;

use ticketbooth_core::AccountId;

/// Charges an account.
pub trait TicketPaymentService: Send + Sync {
    /// Take `amount` (smallest currency unit) from `account_id`.
    fn make_payment(&self, account_id: AccountId, amount: u64);
}

/// Reserves seats for an account.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64);
}

impl<S> TicketPaymentService for Arc<S>
where
    S: TicketPaymentService + ?Sized,
{
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        (**self).make_payment(account_id, amount)
    }
}

impl<S> TicketPaymentService for &S
where
    S: TicketPaymentService + ?Sized,
{
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        (**self).make_payment(account_id, amount)
    }
}

impl<S> SeatReservationService for Arc<S>
where
    S: SeatReservationService + ?Sized,
{
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<S> SeatReservationService for &S
where
    S: SeatReservationService + ?Sized,
{
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) {
        (**self).reserve_seat(account_id, seat_count)
    }
}
