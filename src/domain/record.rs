use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Clock, Identifiable};
use crate::render::Field;

pub const DEFAULT_ISSUER: &str = "DefaultIssuer";
pub const DEFAULT_RECIPIENT: &str = "DefaultRecipient";

/// Labels which document variant produced a record. Display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Receipt,
    Invoice,
    Bill,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Receipt => "Receipt",
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Bill => "Bill",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive fields common to every document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordHeader {
    id: Uuid,
    kind: DocumentKind,
    issuer: String,
    recipient: String,
    issued_at: DateTime<Utc>,
}

impl RecordHeader {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn fields(&self) -> Vec<Field> {
        vec![
            Field::text("Document Type", self.kind.label()),
            Field::text("Issuer", self.issuer.clone()),
            Field::text("Recipient", self.recipient.clone()),
            Field::date("Date", self.issued_at),
        ]
    }
}

impl Identifiable for RecordHeader {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Optional descriptive fields supplied at construction.
///
/// Unset fields resolve to [`DEFAULT_ISSUER`], [`DEFAULT_RECIPIENT`] and the
/// clock's current instant.
#[derive(Debug, Clone, Default)]
pub struct RecordFields {
    pub issuer: Option<String>,
    pub recipient: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
}

impl RecordFields {
    pub fn new(
        issuer: impl Into<String>,
        recipient: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            issuer: Some(issuer.into()),
            recipient: Some(recipient.into()),
            issued_at: Some(issued_at),
        }
    }

    pub(crate) fn resolve(self, kind: DocumentKind, clock: &dyn Clock) -> RecordHeader {
        RecordHeader {
            id: Uuid::new_v4(),
            kind,
            issuer: self.issuer.unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            recipient: self
                .recipient
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            issued_at: self.issued_at.unwrap_or_else(|| clock.now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::FixedClock;
    use chrono::TimeZone;

    #[test]
    fn unset_fields_resolve_to_defaults() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let header = RecordFields::default().resolve(DocumentKind::Bill, &FixedClock(now));
        assert_eq!(header.kind(), DocumentKind::Bill);
        assert_eq!(header.issuer(), DEFAULT_ISSUER);
        assert_eq!(header.recipient(), DEFAULT_RECIPIENT);
        assert_eq!(header.issued_at(), now);
    }

    #[test]
    fn header_fields_are_ordered() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let header =
            RecordFields::new("Acme", "Bob", now).resolve(DocumentKind::Invoice, &FixedClock(now));
        let labels: Vec<_> = header.fields().iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Document Type", "Issuer", "Recipient", "Date"]);
    }
}
