//! Pricing and purchase limits.
//!
//! Prices are in the smallest currency unit (pence).

use serde::{Deserialize, Serialize};

use ticketbooth_core::{ConfigError, PurchaseResult, PurchaseViolation};

use crate::totals::PurchaseTotals;

pub const DEFAULT_ADULT_PRICE: i64 = 2500;
pub const DEFAULT_CHILD_PRICE: i64 = 1500;
/// Infants travel free; not configurable.
pub const INFANT_PRICE: i64 = 0;
pub const DEFAULT_MAX_TICKETS: i64 = 25;

pub const ADULT_PRICE_ENV: &str = "TICKETBOOTH_ADULT_PRICE";
pub const CHILD_PRICE_ENV: &str = "TICKETBOOTH_CHILD_PRICE";
pub const MAX_TICKETS_ENV: &str = "TICKETBOOTH_MAX_TICKETS";

/// Business rule configuration applied to every purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRules {
    adult_price: i64,
    child_price: i64,
    max_tickets: i64,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            adult_price: DEFAULT_ADULT_PRICE,
            child_price: DEFAULT_CHILD_PRICE,
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

impl PurchaseRules {
    pub fn new(adult_price: i64, child_price: i64, max_tickets: i64) -> Result<Self, ConfigError> {
        if adult_price < 0 {
            return Err(ConfigError::invalid_value(
                ADULT_PRICE_ENV,
                adult_price.to_string(),
                "price must not be negative",
            ));
        }
        if child_price < 0 {
            return Err(ConfigError::invalid_value(
                CHILD_PRICE_ENV,
                child_price.to_string(),
                "price must not be negative",
            ));
        }
        if max_tickets < 1 {
            return Err(ConfigError::invalid_value(
                MAX_TICKETS_ENV,
                max_tickets.to_string(),
                "maximum must be at least 1",
            ));
        }
        Ok(Self {
            adult_price,
            child_price,
            max_tickets,
        })
    }

    /// Read overrides from the process environment; unset keys keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PurchaseRules::from_env`] with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::with_overrides(
            read_i64(&lookup, ADULT_PRICE_ENV)?,
            read_i64(&lookup, CHILD_PRICE_ENV)?,
            read_i64(&lookup, MAX_TICKETS_ENV)?,
        )
    }

    /// Defaults with any supplied value replacing its counterpart.
    pub fn with_overrides(
        adult_price: Option<i64>,
        child_price: Option<i64>,
        max_tickets: Option<i64>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::new(
            adult_price.unwrap_or(defaults.adult_price),
            child_price.unwrap_or(defaults.child_price),
            max_tickets.unwrap_or(defaults.max_tickets),
        )
    }

    pub fn adult_price(&self) -> i64 {
        self.adult_price
    }

    pub fn child_price(&self) -> i64 {
        self.child_price
    }

    pub fn infant_price(&self) -> i64 {
        INFANT_PRICE
    }

    pub fn max_tickets(&self) -> i64 {
        self.max_tickets
    }

    /// Check aggregated totals. The first violated rule wins.
    ///
    /// Order: ticket limit, adult chaperone, non-zero total, non-negative
    /// amount and seats, infants on laps.
    pub fn validate(&self, totals: &PurchaseTotals) -> PurchaseResult<()> {
        if totals.total_tickets() > self.max_tickets {
            return Err(PurchaseViolation::TooManyTickets {
                requested: totals.total_tickets(),
                max: self.max_tickets,
            }
            .into());
        }

        if (totals.child_tickets() > 0 || totals.infant_tickets() > 0)
            && totals.adult_tickets() == 0
        {
            return Err(PurchaseViolation::MissingAdult.into());
        }

        // Unreachable while every request carries count >= 1; guards the aggregation.
        if totals.total_tickets() <= 0 {
            return Err(PurchaseViolation::ZeroTickets.into());
        }
        if totals.amount_due() < 0 {
            return Err(PurchaseViolation::NegativeAmount.into());
        }
        if totals.seats_to_allocate() < 0 {
            return Err(PurchaseViolation::NegativeSeats.into());
        }

        if totals.infant_tickets() > totals.adult_tickets() {
            return Err(PurchaseViolation::InfantsExceedAdults {
                infants: totals.infant_tickets(),
                adults: totals.adult_tickets(),
            }
            .into());
        }

        Ok(())
    }
}

fn read_i64<F>(lookup: &F, key: &str) -> Result<Option<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| ConfigError::invalid_value(key, raw.clone(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn totals(adults: i64, children: i64, infants: i64) -> PurchaseTotals {
        PurchaseTotals::from_counts(adults, children, infants, &PurchaseRules::default()).unwrap()
    }

    fn violation(result: PurchaseResult<()>) -> PurchaseViolation {
        result.unwrap_err().violation().clone()
    }

    #[test]
    fn default_rules_match_published_prices() {
        let rules = PurchaseRules::default();
        assert_eq!(rules.adult_price(), 2500);
        assert_eq!(rules.child_price(), 1500);
        assert_eq!(rules.infant_price(), 0);
        assert_eq!(rules.max_tickets(), 25);
    }

    #[test]
    fn exactly_max_tickets_is_allowed() {
        assert!(PurchaseRules::default().validate(&totals(25, 0, 0)).is_ok());
        assert!(PurchaseRules::default().validate(&totals(10, 10, 5)).is_ok());
    }

    #[test]
    fn ticket_limit_is_checked_before_chaperone_rule() {
        assert_eq!(
            violation(PurchaseRules::default().validate(&totals(0, 26, 0))),
            PurchaseViolation::TooManyTickets {
                requested: 26,
                max: 25
            }
        );
    }

    #[test]
    fn children_or_infants_need_an_adult() {
        let rules = PurchaseRules::default();
        assert_eq!(violation(rules.validate(&totals(0, 1, 0))), PurchaseViolation::MissingAdult);
        assert_eq!(violation(rules.validate(&totals(0, 0, 1))), PurchaseViolation::MissingAdult);
    }

    #[test]
    fn infants_cannot_outnumber_adults() {
        let rules = PurchaseRules::default();
        assert_eq!(
            violation(rules.validate(&totals(2, 0, 3))),
            PurchaseViolation::InfantsExceedAdults {
                infants: 3,
                adults: 2
            }
        );
        assert!(rules.validate(&totals(2, 0, 2)).is_ok());
    }

    #[test]
    fn empty_totals_are_rejected() {
        assert_eq!(
            violation(PurchaseRules::default().validate(&PurchaseTotals::default())),
            PurchaseViolation::ZeroTickets
        );
    }

    #[test]
    fn negative_seat_count_is_rejected() {
        // 3 adults, -4 children, 2 infants: one ticket, 1500 due, -1 seats.
        assert_eq!(
            violation(PurchaseRules::default().validate(&totals(3, -4, 2))),
            PurchaseViolation::NegativeSeats
        );
    }

    #[test]
    fn negative_amount_is_rejected_before_negative_seats() {
        // One ticket, -500 due, -1 seats.
        assert_eq!(
            violation(PurchaseRules::default().validate(&totals(1, -2, 2))),
            PurchaseViolation::NegativeAmount
        );
    }

    #[test]
    fn zero_tickets_is_rejected_before_negative_amount() {
        // Zero tickets, -500 due, -1 seats.
        assert_eq!(
            violation(PurchaseRules::default().validate(&totals(1, -2, 1))),
            PurchaseViolation::ZeroTickets
        );
    }

    #[test]
    fn from_lookup_uses_defaults_when_unset() {
        let rules = PurchaseRules::from_lookup(|_| None).unwrap();
        assert_eq!(rules, PurchaseRules::default());
    }

    #[test]
    fn from_lookup_applies_overrides() {
        let env: HashMap<&str, &str> = [(ADULT_PRICE_ENV, "3000"), (MAX_TICKETS_ENV, " 10 ")]
            .into_iter()
            .collect();
        let rules = PurchaseRules::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(rules.adult_price(), 3000);
        assert_eq!(rules.child_price(), DEFAULT_CHILD_PRICE);
        assert_eq!(rules.max_tickets(), 10);
    }

    #[test]
    fn from_lookup_rejects_garbage_and_out_of_range_values() {
        let err = PurchaseRules::from_lookup(|k| (k == CHILD_PRICE_ENV).then(|| "cheap".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == CHILD_PRICE_ENV));

        let err = PurchaseRules::from_lookup(|k| (k == MAX_TICKETS_ENV).then(|| "0".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == MAX_TICKETS_ENV));

        assert!(PurchaseRules::new(-1, 1500, 25).is_err());
    }

    #[test]
    fn with_overrides_replaces_only_supplied_values() {
        let rules = PurchaseRules::with_overrides(None, Some(900), None).unwrap();
        assert_eq!(rules.adult_price(), DEFAULT_ADULT_PRICE);
        assert_eq!(rules.child_price(), 900);
        assert_eq!(rules.max_tickets(), DEFAULT_MAX_TICKETS);

        assert_eq!(PurchaseRules::with_overrides(None, None, None).unwrap(), PurchaseRules::default());
        assert!(PurchaseRules::with_overrides(None, None, Some(0)).is_err());
    }
}
