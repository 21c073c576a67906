//! Collaborators that only log what they are asked to do.

use tracing::info;

use ticketbooth_core::AccountId;
use ticketbooth_purchasing::{SeatReservationService, TicketPaymentService};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        info!(%account_id, amount, "payment taken");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReservationService;

impl SeatReservationService for LoggingReservationService {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) {
        info!(%account_id, seat_count, "seats reserved");
    }
}
