//! `ticketbooth-core`: shared building blocks for ticket purchasing.
//!
//! This crate contains **pure domain** primitives (no IO, no collaborators).

pub mod error;
pub mod id;

pub use error::{ConfigError, InvalidPurchase, PurchaseResult, PurchaseViolation, TicketRequestError};
pub use id::{AccountId, MIN_ACCOUNT_ID};
