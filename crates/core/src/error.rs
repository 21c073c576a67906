//! Error model for ticket purchasing.
//!
//! Three error families:
//!
//! - [`InvalidPurchase`]: a purchase broke a business rule (raised by the processor).
//! - [`TicketRequestError`]: a single ticket request could not be constructed.
//! - [`ConfigError`]: the processor or its rules could not be wired up.

use thiserror::Error;

/// Result type used by every purchase operation.
pub type PurchaseResult<T> = Result<T, InvalidPurchase>;

/// The business rule a purchase violated.
///
/// Display strings are the human-readable reasons reported to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseViolation {
    /// Account id missing or below the minimum valid id.
    #[error("account id is invalid; it must be present and greater than zero")]
    InvalidAccount,

    /// No ticket requests were supplied.
    #[error("at least one ticket type must be requested")]
    NoTickets,

    /// More tickets than a single purchase allows.
    #[error("cannot purchase more than {max} tickets at a time (requested: {requested})")]
    TooManyTickets { requested: i64, max: i64 },

    /// Child or infant tickets without an accompanying adult.
    #[error("child or infant tickets cannot be purchased without at least one adult ticket")]
    MissingAdult,

    /// Ticket counts or the amount due do not fit the totals' integer range.
    #[error("ticket totals are too large to calculate")]
    TotalsOverflow,

    /// Aggregation produced no tickets at all.
    #[error("cannot make a purchase request for zero tickets")]
    ZeroTickets,

    /// Aggregation produced a negative amount due.
    #[error("internal error: calculated payment amount is negative")]
    NegativeAmount,

    /// Aggregation produced a negative seat count.
    #[error("internal error: calculated seat allocation is negative")]
    NegativeSeats,

    /// Every infant sits on an adult's lap.
    #[error("number of infants ({infants}) cannot exceed the number of adults ({adults})")]
    InfantsExceedAdults { infants: i64, adults: i64 },
}

/// A purchase was rejected.
///
/// This is the only error `purchase_tickets` returns; the rule that failed is
/// available through [`InvalidPurchase::violation`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid purchase: {violation}")]
pub struct InvalidPurchase {
    violation: PurchaseViolation,
}

impl InvalidPurchase {
    pub fn new(violation: PurchaseViolation) -> Self {
        Self { violation }
    }

    pub fn violation(&self) -> &PurchaseViolation {
        &self.violation
    }

    /// Human-readable reason identifying the failed rule.
    pub fn reason(&self) -> String {
        self.violation.to_string()
    }
}

impl From<PurchaseViolation> for InvalidPurchase {
    fn from(violation: PurchaseViolation) -> Self {
        Self::new(violation)
    }
}

/// A ticket request could not be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketRequestError {
    #[error("ticket type must be set")]
    MissingType,

    #[error("number of tickets must be greater than zero (provided: {0})")]
    NonPositiveCount(i64),
}

/// Construction-time configuration failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ticket payment service must be provided")]
    MissingPaymentService,

    #[error("seat reservation service must be provided")]
    MissingReservationService,

    /// A configuration value was present but unusable.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_purchase_reason_names_the_rule() {
        let err = InvalidPurchase::from(PurchaseViolation::TooManyTickets {
            requested: 26,
            max: 25,
        });
        assert_eq!(
            err.reason(),
            "cannot purchase more than 25 tickets at a time (requested: 26)"
        );
        assert!(err.to_string().starts_with("invalid purchase: "));
    }

    #[test]
    fn infant_violation_reports_both_counts() {
        let err = InvalidPurchase::new(PurchaseViolation::InfantsExceedAdults {
            infants: 3,
            adults: 2,
        });
        assert!(err.reason().contains("(3)"));
        assert!(err.reason().contains("(2)"));
    }

    #[test]
    fn ticket_request_error_includes_count() {
        let err = TicketRequestError::NonPositiveCount(-4);
        assert_eq!(
            err.to_string(),
            "number of tickets must be greater than zero (provided: -4)"
        );
    }

    #[test]
    fn config_error_invalid_value_formats_key_and_value() {
        let err = ConfigError::invalid_value("TICKETBOOTH_MAX_TICKETS", "zero", "not a number");
        assert_eq!(
            err.to_string(),
            "invalid value for TICKETBOOTH_MAX_TICKETS: \"zero\" (not a number)"
        );
    }
}
