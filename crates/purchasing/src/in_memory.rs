//! In-memory collaborators for tests/dev.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ticketbooth_core::AccountId;

use crate::services::{SeatReservationService, TicketPaymentService};

/// One observed collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorCall {
    Payment { account_id: AccountId, amount: u64 },
    Reservation { account_id: AccountId, seat_count: u64 },
}

/// Ordered log of collaborator calls, shared by the recording services.
///
/// Cloning shares the underlying log.
#[derive(Debug, Clone, Default)]
pub struct CallJournal {
    calls: Arc<Mutex<Vec<CollaboratorCall>>>,
}

impl CallJournal {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CollaboratorCall>> {
        // Poisoning is ignored; recorded calls stay readable.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: CollaboratorCall) {
        self.lock().push(call);
    }

    /// Snapshot of every call so far, in call order.
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.lock().clone()
    }

    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.lock()
            .iter()
            .filter_map(|call| match *call {
                CollaboratorCall::Payment { account_id, amount } => Some((account_id, amount)),
                CollaboratorCall::Reservation { .. } => None,
            })
            .collect()
    }

    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.lock()
            .iter()
            .filter_map(|call| match *call {
                CollaboratorCall::Reservation {
                    account_id,
                    seat_count,
                } => Some((account_id, seat_count)),
                CollaboratorCall::Payment { .. } => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Payment service that only records what it was asked to charge.
#[derive(Debug, Clone, Default)]
pub struct RecordingPaymentService {
    journal: CallJournal,
}

impl RecordingPaymentService {
    pub fn new(journal: CallJournal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &CallJournal {
        &self.journal
    }
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        self.journal
            .record(CollaboratorCall::Payment { account_id, amount });
    }
}

/// Reservation service that only records what it was asked to reserve.
#[derive(Debug, Clone, Default)]
pub struct RecordingReservationService {
    journal: CallJournal,
}

impl RecordingReservationService {
    pub fn new(journal: CallJournal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &CallJournal {
        &self.journal
    }
}

impl SeatReservationService for RecordingReservationService {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) {
        self.journal.record(CollaboratorCall::Reservation {
            account_id,
            seat_count,
        });
    }
}

/// Payment and reservation recorders writing to one shared journal.
pub fn recording_pair() -> (RecordingPaymentService, RecordingReservationService, CallJournal) {
    let journal = CallJournal::new();
    (
        RecordingPaymentService::new(journal.clone()),
        RecordingReservationService::new(journal.clone()),
        journal,
    )
}
