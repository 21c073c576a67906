//! `ticketbooth` command-line front end.
//!
//! Reads a JSON purchase document, runs it through a [`PurchaseProcessor`]
//! wired to logging collaborators and reports the outcome.

pub mod args;
pub mod gateways;
pub mod input;

use serde::Serialize;
use thiserror::Error;

use ticketbooth_core::InvalidPurchase;
use ticketbooth_purchasing::{
    PurchaseProcessor, PurchaseRules, SeatReservationService, TicketPaymentService,
};

pub use args::CliArgs;
pub use gateways::{LoggingPaymentService, LoggingReservationService};
pub use input::PurchaseDocument;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("malformed purchase document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Purchase(#[from] InvalidPurchase),
}

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub account_id: i64,
    pub tickets: i64,
    pub amount_paid: u64,
    pub seats_reserved: u64,
}

/// Decode `document` and purchase it through `processor`.
pub fn run<P, R>(
    processor: &PurchaseProcessor<P, R>,
    document: &str,
) -> Result<PurchaseSummary, CliError>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    let document = PurchaseDocument::from_json(document)?;
    let receipt = processor.purchase(document.account_id, document.requests())?;

    Ok(PurchaseSummary {
        account_id: receipt.account_id().get(),
        tickets: receipt.totals().total_tickets(),
        amount_paid: receipt.amount_charged(),
        seats_reserved: receipt.seats_reserved(),
    })
}

/// Processor backed by the logging collaborators.
pub fn logging_processor(
    rules: PurchaseRules,
) -> PurchaseProcessor<LoggingPaymentService, LoggingReservationService> {
    PurchaseProcessor::with_rules(LoggingPaymentService, LoggingReservationService, rules)
}
