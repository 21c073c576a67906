//! Ticket purchasing domain module.
//!
//! Business rules for buying adult, child and infant tickets, implemented as
//! deterministic domain logic. Payment and seat reservation are reached only
//! through the collaborator traits in [`services`].

pub mod in_memory;
pub mod processor;
pub mod rules;
pub mod services;
pub mod ticket;
pub mod totals;

pub use in_memory::{
    CallJournal, CollaboratorCall, RecordingPaymentService, RecordingReservationService,
    recording_pair,
};
pub use processor::{PurchaseProcessor, PurchaseProcessorBuilder, PurchaseReceipt, TicketService};
pub use rules::PurchaseRules;
pub use services::{SeatReservationService, TicketPaymentService};
pub use ticket::{RawTicketRequest, TicketType, TicketTypeRequest};
pub use totals::PurchaseTotals;
