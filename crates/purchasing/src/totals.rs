use serde::{Deserialize, Serialize};

use ticketbooth_core::{PurchaseResult, PurchaseViolation};

use crate::rules::PurchaseRules;
use crate::ticket::{TicketType, TicketTypeRequest};

/// Totals computed once per purchase from its ticket requests.
///
/// Invariants (for any value built by this module):
/// - `total_tickets == adult + child + infant`
/// - `seats_to_allocate == adult + child`
/// - `amount_due == adult * adult_price + child * child_price`
///
/// Arithmetic is checked; a batch whose totals do not fit in `i64` is rejected
/// with [`PurchaseViolation::TotalsOverflow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    total_tickets: i64,
    seats_to_allocate: i64,
    amount_due: i64,
    adult_tickets: i64,
    child_tickets: i64,
    infant_tickets: i64,
}

impl PurchaseTotals {
    /// Aggregate a batch of requests. Order and splitting do not matter.
    pub fn aggregate(
        requests: &[TicketTypeRequest],
        rules: &PurchaseRules,
    ) -> PurchaseResult<Self> {
        requests.iter().try_fold(Self::default(), |totals, request| {
            totals.add_count(request.ticket_type(), request.count(), rules)
        })
    }

    /// Totals for raw per-type counts.
    ///
    /// Counts are not checked against the ticket request contract, so negative
    /// values are accepted; rule validation is expected to reject them.
    pub(crate) fn from_counts(
        adults: i64,
        children: i64,
        infants: i64,
        rules: &PurchaseRules,
    ) -> PurchaseResult<Self> {
        [
            (TicketType::Adult, adults),
            (TicketType::Child, children),
            (TicketType::Infant, infants),
        ]
        .into_iter()
        .try_fold(Self::default(), |totals, (ticket_type, count)| {
            totals.add_count(ticket_type, count, rules)
        })
    }

    fn add_count(
        mut self,
        ticket_type: TicketType,
        count: i64,
        rules: &PurchaseRules,
    ) -> PurchaseResult<Self> {
        self.total_tickets = checked(self.total_tickets.checked_add(count))?;

        let unit_price = match ticket_type {
            TicketType::Adult => {
                self.adult_tickets = checked(self.adult_tickets.checked_add(count))?;
                rules.adult_price()
            }
            TicketType::Child => {
                self.child_tickets = checked(self.child_tickets.checked_add(count))?;
                rules.child_price()
            }
            TicketType::Infant => {
                self.infant_tickets = checked(self.infant_tickets.checked_add(count))?;
                rules.infant_price()
            }
        };
        let line_amount = checked(count.checked_mul(unit_price))?;
        self.amount_due = checked(self.amount_due.checked_add(line_amount))?;

        if ticket_type.occupies_seat() {
            self.seats_to_allocate = checked(self.seats_to_allocate.checked_add(count))?;
        }
        Ok(self)
    }

    pub fn total_tickets(&self) -> i64 {
        self.total_tickets
    }

    pub fn seats_to_allocate(&self) -> i64 {
        self.seats_to_allocate
    }

    /// Amount due in the smallest currency unit.
    pub fn amount_due(&self) -> i64 {
        self.amount_due
    }

    pub fn adult_tickets(&self) -> i64 {
        self.adult_tickets
    }

    pub fn child_tickets(&self) -> i64 {
        self.child_tickets
    }

    pub fn infant_tickets(&self) -> i64 {
        self.infant_tickets
    }

    pub fn count_of(&self, ticket_type: TicketType) -> i64 {
        match ticket_type {
            TicketType::Adult => self.adult_tickets,
            TicketType::Child => self.child_tickets,
            TicketType::Infant => self.infant_tickets,
        }
    }
}

fn checked(value: Option<i64>) -> PurchaseResult<i64> {
    value.ok_or_else(|| PurchaseViolation::TotalsOverflow.into())
}
