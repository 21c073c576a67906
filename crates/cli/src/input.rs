use serde::Deserialize;

use ticketbooth_purchasing::TicketTypeRequest;

/// JSON purchase document:
///
/// ```json
/// { "account_id": 7, "tickets": [{ "type": "adult", "count": 2 }] }
/// ```
///
/// Both fields may be omitted; the processor rejects what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PurchaseDocument {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub tickets: Option<Vec<TicketTypeRequest>>,
}

impl PurchaseDocument {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Ticket requests, empty when `tickets` was absent.
    pub fn requests(&self) -> &[TicketTypeRequest] {
        self.tickets.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_document() {
        let doc = PurchaseDocument::from_json(
            r#"{"account_id": 7, "tickets": [{"type": "adult", "count": 2}]}"#,
        )
        .unwrap();
        assert_eq!(doc.account_id, Some(7));
        assert_eq!(doc.requests(), &[TicketTypeRequest::adult(2).unwrap()]);
    }

    #[test]
    fn missing_fields_decode_as_absent() {
        let doc = PurchaseDocument::from_json("{}").unwrap();
        assert_eq!(doc.account_id, None);
        assert!(doc.tickets.is_none());
        assert!(doc.requests().is_empty());
    }

    #[test]
    fn invalid_ticket_request_fails_decoding() {
        let err = PurchaseDocument::from_json(
            r#"{"account_id": 7, "tickets": [{"type": "child", "count": -1}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        assert!(
            PurchaseDocument::from_json(r#"{"tickets": [{"type": "senior", "count": 1}]}"#)
                .is_err()
        );
    }
}
