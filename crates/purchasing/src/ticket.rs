use serde::{Deserialize, Serialize};

use ticketbooth_core::TicketRequestError;

/// Ticket category.
///
/// Matches over this enum are exhaustive; adding a category is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Whether a ticket of this type occupies a seat.
    pub fn occupies_seat(self) -> bool {
        match self {
            TicketType::Adult | TicketType::Child => true,
            TicketType::Infant => false,
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TicketType::Adult => "adult",
            TicketType::Child => "child",
            TicketType::Infant => "infant",
        };
        f.write_str(name)
    }
}

/// Request for `count` tickets of one type.
///
/// Immutable; `count >= 1` holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest")]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: i64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Result<Self, TicketRequestError> {
        if count <= 0 {
            return Err(TicketRequestError::NonPositiveCount(count));
        }
        Ok(Self { ticket_type, count })
    }

    /// Build from a possibly-unset type (e.g. decoded input).
    pub fn from_parts(
        ticket_type: Option<TicketType>,
        count: i64,
    ) -> Result<Self, TicketRequestError> {
        let ticket_type = ticket_type.ok_or(TicketRequestError::MissingType)?;
        Self::new(ticket_type, count)
    }

    pub fn adult(count: i64) -> Result<Self, TicketRequestError> {
        Self::new(TicketType::Adult, count)
    }

    pub fn child(count: i64) -> Result<Self, TicketRequestError> {
        Self::new(TicketType::Child, count)
    }

    pub fn infant(count: i64) -> Result<Self, TicketRequestError> {
        Self::new(TicketType::Infant, count)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

impl core::fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} x {}", self.count, self.ticket_type)
    }
}

/// Unvalidated wire shape of a ticket request.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTicketRequest {
    #[serde(rename = "type", default)]
    pub ticket_type: Option<TicketType>,
    pub count: i64,
}

impl TryFrom<RawTicketRequest> for TicketTypeRequest {
    type Error = TicketRequestError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        Self::from_parts(raw.ticket_type, raw.count)
    }
}
