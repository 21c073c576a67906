//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use ticketbooth_core::ConfigError;
use ticketbooth_purchasing::PurchaseRules;
use ticketbooth_purchasing::rules::{ADULT_PRICE_ENV, CHILD_PRICE_ENV, MAX_TICKETS_ENV};

#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "ticketbooth", about = "Purchase tickets from a JSON document", version)]
pub struct CliArgs {
    #[arg(
        value_name = "FILE",
        help = "Purchase document to read; standard input when omitted"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        long,
        env = ADULT_PRICE_ENV,
        value_name = "PENCE",
        help = "Price of one adult ticket"
    )]
    pub adult_price: Option<i64>,

    #[arg(
        long,
        env = CHILD_PRICE_ENV,
        value_name = "PENCE",
        help = "Price of one child ticket"
    )]
    pub child_price: Option<i64>,

    #[arg(
        long,
        env = MAX_TICKETS_ENV,
        value_name = "N",
        help = "Maximum tickets in a single purchase"
    )]
    pub max_tickets: Option<i64>,
}

impl CliArgs {
    /// Purchase rules with any supplied overrides applied to the defaults.
    pub fn rules(&self) -> Result<PurchaseRules, ConfigError> {
        PurchaseRules::with_overrides(self.adult_price, self.child_price, self.max_tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn path_is_optional() {
        let args = CliArgs::try_parse_from(["ticketbooth"]).unwrap();
        assert_eq!(args.path, None);

        let args = CliArgs::try_parse_from(["ticketbooth", "order.json"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("order.json")));
    }

    #[test]
    fn rule_flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "ticketbooth",
            "--adult-price",
            "3000",
            "--max-tickets",
            "10",
        ])
        .unwrap();
        let rules = args.rules().unwrap();
        assert_eq!(rules.adult_price(), 3000);
        assert_eq!(rules.child_price(), 1500);
        assert_eq!(rules.max_tickets(), 10);
    }

    #[test]
    fn unusable_rule_values_are_reported() {
        assert!(CliArgs::try_parse_from(["ticketbooth", "--child-price", "cheap"]).is_err());

        let args = CliArgs::try_parse_from(["ticketbooth", "--max-tickets", "0"]).unwrap();
        assert!(matches!(
            args.rules().unwrap_err(),
            ConfigError::InvalidValue { ref key, .. } if key == MAX_TICKETS_ENV
        ));
    }
}
