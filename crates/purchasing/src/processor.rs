//! Purchase processing pipeline.
//!
//! ```text
//! purchase_tickets(account_id, requests)
//!   ↓
//! 1. Validate account id (present, >= 1)
//!   ↓
//! 2. Validate requests (non-empty)
//!   ↓
//! 3. Aggregate totals (counts, seats, amount due; overflow is rejected)
//!   ↓
//! 4. Validate totals against PurchaseRules
//!   ↓
//! 5. Charge payment        (only if amount > 0)
//!   ↓
//! 6. Reserve seats         (only if seats > 0)
//! ```
//!
//! Every check runs before the first collaborator call: a rejected purchase has
//! no side effects. The processor holds no mutable state, so one instance can
//! serve concurrent callers.

use tracing::{debug, info, instrument, warn};

use ticketbooth_core::{AccountId, ConfigError, PurchaseResult, PurchaseViolation};

use crate::rules::PurchaseRules;
use crate::services::{SeatReservationService, TicketPaymentService};
use crate::ticket::TicketTypeRequest;
use crate::totals::PurchaseTotals;

/// Public purchase operation.
pub trait TicketService {
    /// Purchase tickets for an account.
    ///
    /// `account_id` is `None` when the caller has no account id at all.
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<()>;
}

/// What a completed purchase charged and reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    account_id: AccountId,
    totals: PurchaseTotals,
    amount_charged: u64,
    seats_reserved: u64,
}

impl PurchaseReceipt {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// The validated totals the charge was computed from.
    pub fn totals(&self) -> &PurchaseTotals {
        &self.totals
    }

    /// Zero when no payment call was made.
    pub fn amount_charged(&self) -> u64 {
        self.amount_charged
    }

    /// Zero when no reservation call was made.
    pub fn seats_reserved(&self) -> u64 {
        self.seats_reserved
    }
}

/// Validates purchases and hands the result to payment and seat reservation.
pub struct PurchaseProcessor<P, R> {
    payment: P,
    reservation: R,
    rules: PurchaseRules,
}

impl<P, R> core::fmt::Debug for PurchaseProcessor<P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PurchaseProcessor")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl<P, R> PurchaseProcessor<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Processor with the default [`PurchaseRules`].
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_rules(payment, reservation, PurchaseRules::default())
    }

    pub fn with_rules(payment: P, reservation: R, rules: PurchaseRules) -> Self {
        Self {
            payment,
            reservation,
            rules,
        }
    }

    pub fn builder() -> PurchaseProcessorBuilder<P, R> {
        PurchaseProcessorBuilder::new()
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Aggregate and validate `requests` without charging or reserving anything.
    pub fn quote(&self, requests: &[TicketTypeRequest]) -> PurchaseResult<PurchaseTotals> {
        if requests.is_empty() {
            return Err(PurchaseViolation::NoTickets.into());
        }

        let totals = PurchaseTotals::aggregate(requests, &self.rules)?;
        debug!(
            total_tickets = totals.total_tickets(),
            adults = totals.adult_tickets(),
            children = totals.child_tickets(),
            infants = totals.infant_tickets(),
            seats = totals.seats_to_allocate(),
            amount_due = totals.amount_due(),
            "aggregated ticket requests"
        );

        self.rules.validate(&totals)?;
        Ok(totals)
    }

    /// Purchase tickets and report what was charged and reserved.
    ///
    /// Same checks and side effects as [`TicketService::purchase_tickets`].
    #[instrument(skip(self, requests), fields(request_count = requests.len()))]
    pub fn purchase(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseReceipt> {
        self.process(account_id, requests)
            .inspect_err(|err| warn!(reason = %err.reason(), "purchase rejected"))
    }

    fn process(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseReceipt> {
        let account_id = AccountId::from_raw(account_id)?;
        let totals = self.quote(requests)?;
        let (amount, seats) = charge_quantities(&totals)?;

        if amount > 0 {
            debug!(%account_id, amount, "requesting payment");
            self.payment.make_payment(account_id, amount);
        }
        if seats > 0 {
            debug!(%account_id, seats, "requesting seat reservation");
            self.reservation.reserve_seat(account_id, seats);
        }

        info!(%account_id, amount, seats, "purchase completed");
        Ok(PurchaseReceipt {
            account_id,
            totals,
            amount_charged: amount,
            seats_reserved: seats,
        })
    }
}

/// Amount and seat count in the collaborators' unsigned units.
fn charge_quantities(totals: &PurchaseTotals) -> PurchaseResult<(u64, u64)> {
    let amount =
        u64::try_from(totals.amount_due()).map_err(|_| PurchaseViolation::NegativeAmount)?;
    let seats =
        u64::try_from(totals.seats_to_allocate()).map_err(|_| PurchaseViolation::NegativeSeats)?;
    Ok((amount, seats))
}

impl<P, R> TicketService for PurchaseProcessor<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<()> {
        self.purchase(account_id, requests).map(|_| ())
    }
}

/// Step-by-step construction of a [`PurchaseProcessor`].
///
/// `build` fails when either collaborator was never supplied.
pub struct PurchaseProcessorBuilder<P, R> {
    payment: Option<P>,
    reservation: Option<R>,
    rules: PurchaseRules,
}

impl<P, R> PurchaseProcessorBuilder<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    pub fn new() -> Self {
        Self {
            payment: None,
            reservation: None,
            rules: PurchaseRules::default(),
        }
    }

    pub fn payment(mut self, payment: P) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn reservation(mut self, reservation: R) -> Self {
        self.reservation = Some(reservation);
        self
    }

    pub fn rules(mut self, rules: PurchaseRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> Result<PurchaseProcessor<P, R>, ConfigError> {
        let payment = self.payment.ok_or(ConfigError::MissingPaymentService)?;
        let reservation = self
            .reservation
            .ok_or(ConfigError::MissingReservationService)?;
        Ok(PurchaseProcessor::with_rules(payment, reservation, self.rules))
    }
}

impl<P, R> Default for PurchaseProcessorBuilder<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    fn default() -> Self {
        Self::new()
    }
}
