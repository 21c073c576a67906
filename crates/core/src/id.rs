//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidPurchase, PurchaseViolation};

/// Smallest account id accepted for a purchase.
pub const MIN_ACCOUNT_ID: i64 = 1;

/// Identifier of a purchasing account.
///
/// Always `>= MIN_ACCOUNT_ID`; construction through [`AccountId::new`] or
/// [`AccountId::from_raw`] is the only way to obtain one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(raw: i64) -> Result<Self, InvalidPurchase> {
        if raw < MIN_ACCOUNT_ID {
            return Err(PurchaseViolation::InvalidAccount.into());
        }
        Ok(Self(raw))
    }

    /// Validate a possibly-absent raw account id.
    pub fn from_raw(raw: Option<i64>) -> Result<Self, InvalidPurchase> {
        raw.ok_or_else(|| InvalidPurchase::new(PurchaseViolation::InvalidAccount))
            .and_then(Self::new)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl FromStr for AccountId {
    type Err = InvalidPurchase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidPurchase::new(PurchaseViolation::InvalidAccount))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_account_id() {
        let id = AccountId::new(1).unwrap();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn rejects_zero_negative_and_absent() {
        for raw in [Some(0), Some(-1), Some(i64::MIN), None] {
            let err = AccountId::from_raw(raw).unwrap_err();
            assert_eq!(err.violation(), &PurchaseViolation::InvalidAccount);
        }
    }

    #[test]
    fn parses_from_string() {
        assert_eq!("42".parse::<AccountId>().unwrap().get(), 42);
        assert!("abc".parse::<AccountId>().is_err());
        assert!("0".parse::<AccountId>().is_err());
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let id: AccountId = serde_json::from_str("17").unwrap();
        assert_eq!(id.get(), 17);
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
        assert!(serde_json::from_str::<AccountId>("0").is_err());
    }
}
