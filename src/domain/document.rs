use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::common::{Clock, Displayable, Identifiable, SystemClock};
use crate::domain::record::{DocumentKind, RecordFields, RecordHeader};
use crate::errors::{RecordError, Result};
use crate::render::Field;

/// Documents that carry a monetary total.
pub trait Transactional {
    fn amount(&self) -> Decimal;
}

/// Documents that describe a product line.
pub trait InvoiceItem {
    fn product(&self) -> &str;
    fn quantity(&self) -> i32;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    header: RecordHeader,
    amount: Decimal,
}

impl Receipt {
    pub fn new(
        issuer: impl Into<String>,
        recipient: impl Into<String>,
        issued_at: DateTime<Utc>,
        amount: Decimal,
    ) -> Self {
        Self::build(
            RecordFields::new(issuer, recipient, issued_at),
            Some(amount),
            &SystemClock,
        )
    }

    /// Receipt with default issuer, recipient and the current date.
    pub fn with_amount(amount: Decimal) -> Self {
        Self::build(RecordFields::default(), Some(amount), &SystemClock)
    }

    pub fn build(fields: RecordFields, amount: Option<Decimal>, clock: &dyn Clock) -> Self {
        let header = fields.resolve(DocumentKind::Receipt, clock);
        let amount = amount.unwrap_or_default();
        debug!(issuer = header.issuer(), %amount, "receipt constructed");
        Self { header, amount }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    pub fn validate(&self) -> Result<()> {
        non_negative("amount", self.amount)
    }
}

impl Transactional for Receipt {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for Receipt {
    fn shared_fields(&self) -> Vec<Field> {
        self.header.fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        vec![Field::money("Amount", self.amount)]
    }
}

/// Product and quantity for an [`Invoice`]. Unset values become an empty
/// product name and zero quantity.
#[derive(Debug, Clone, Default)]
pub struct InvoiceLine {
    pub product: Option<String>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    header: RecordHeader,
    product: String,
    quantity: i32,
}

impl Invoice {
    pub fn new(
        issuer: impl Into<String>,
        recipient: impl Into<String>,
        issued_at: DateTime<Utc>,
        product: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self::build(
            RecordFields::new(issuer, recipient, issued_at),
            InvoiceLine {
                product: Some(product.into()),
                quantity: Some(quantity),
            },
            &SystemClock,
        )
    }

    pub fn with_quantity(quantity: i32) -> Self {
        Self::build(
            RecordFields::default(),
            InvoiceLine {
                product: None,
                quantity: Some(quantity),
            },
            &SystemClock,
        )
    }

    pub fn build(fields: RecordFields, line: InvoiceLine, clock: &dyn Clock) -> Self {
        let header = fields.resolve(DocumentKind::Invoice, clock);
        let product = line.product.unwrap_or_default();
        let quantity = line.quantity.unwrap_or_default();
        debug!(issuer = header.issuer(), product = %product, quantity, "invoice constructed");
        Self {
            header,
            product,
            quantity,
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantity < 0 {
            return Err(RecordError::invalid_field(
                "quantity",
                format!("must not be negative, got {}", self.quantity),
            ));
        }
        Ok(())
    }
}

impl InvoiceItem for Invoice {
    fn product(&self) -> &str {
        &self.product
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl Displayable for Invoice {
    fn shared_fields(&self) -> Vec<Field> {
        self.header.fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        vec![
            Field::text("Product", self.product.clone()),
            Field::integer("Quantity", i64::from(self.quantity)),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    header: RecordHeader,
    total_amount: Decimal,
}

impl Bill {
    pub fn new(
        issuer: impl Into<String>,
        recipient: impl Into<String>,
        issued_at: DateTime<Utc>,
        total_amount: Decimal,
    ) -> Self {
        Self::build(
            RecordFields::new(issuer, recipient, issued_at),
            Some(total_amount),
            &SystemClock,
        )
    }

    /// Bill with default issuer, recipient and the current date.
    pub fn with_total(total_amount: Decimal) -> Self {
        Self::build(RecordFields::default(), Some(total_amount), &SystemClock)
    }

    pub fn build(fields: RecordFields, total_amount: Option<Decimal>, clock: &dyn Clock) -> Self {
        let header = fields.resolve(DocumentKind::Bill, clock);
        let total_amount = total_amount.unwrap_or_default();
        debug!(issuer = header.issuer(), %total_amount, "bill constructed");
        Self {
            header,
            total_amount,
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    pub fn validate(&self) -> Result<()> {
        non_negative("total_amount", self.total_amount)
    }
}

impl Transactional for Bill {
    fn amount(&self) -> Decimal {
        self.total_amount
    }
}

impl Displayable for Bill {
    fn shared_fields(&self) -> Vec<Field> {
        self.header.fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        vec![Field::money("Total Amount", self.total_amount)]
    }
}

/// A business document of exactly one variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Document {
    Receipt(Receipt),
    Invoice(Invoice),
    Bill(Bill),
}

impl Document {
    pub fn header(&self) -> &RecordHeader {
        match self {
            Document::Receipt(receipt) => receipt.header(),
            Document::Invoice(invoice) => invoice.header(),
            Document::Bill(bill) => bill.header(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.header().kind()
    }

    pub fn as_transaction(&self) -> Option<&dyn Transactional> {
        match self {
            Document::Receipt(receipt) => Some(receipt),
            Document::Bill(bill) => Some(bill),
            Document::Invoice(_) => None,
        }
    }

    pub fn as_invoice_item(&self) -> Option<&dyn InvoiceItem> {
        match self {
            Document::Invoice(invoice) => Some(invoice),
            Document::Receipt(_) | Document::Bill(_) => None,
        }
    }

    /// Transaction amount, or `None` when the variant carries no monetary total.
    pub fn try_amount(&self) -> Option<Decimal> {
        self.as_transaction().map(|transaction| transaction.amount())
    }

    pub fn require_amount(&self) -> Result<Decimal> {
        self.try_amount()
            .ok_or_else(|| RecordError::CapabilityNotSupported {
                kind: self.kind().label(),
                capability: "transaction amount",
            })
    }

    /// Rejects negative amounts and quantities.
    pub fn validate(&self) -> Result<()> {
        match self {
            Document::Receipt(receipt) => receipt.validate(),
            Document::Invoice(invoice) => invoice.validate(),
            Document::Bill(bill) => bill.validate(),
        }
    }

    fn as_displayable(&self) -> &dyn Displayable {
        match self {
            Document::Receipt(receipt) => receipt,
            Document::Invoice(invoice) => invoice,
            Document::Bill(bill) => bill,
        }
    }
}

impl Displayable for Document {
    fn shared_fields(&self) -> Vec<Field> {
        self.as_displayable().shared_fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        self.as_displayable().extra_fields()
    }
}

impl Identifiable for Document {
    fn id(&self) -> Uuid {
        self.header().id()
    }
}

impl From<Receipt> for Document {
    fn from(receipt: Receipt) -> Self {
        Document::Receipt(receipt)
    }
}

impl From<Invoice> for Document {
    fn from(invoice: Invoice) -> Self {
        Document::Invoice(invoice)
    }
}

impl From<Bill> for Document {
    fn from(bill: Bill) -> Self {
        Document::Bill(bill)
    }
}

fn non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(RecordError::invalid_field(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::FixedClock;
    use chrono::TimeZone;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn invoice_defaults_to_empty_line() {
        let invoice = Invoice::build(RecordFields::default(), InvoiceLine::default(), &clock());
        assert_eq!(invoice.product(), "");
        assert_eq!(invoice.quantity(), 0);
        assert_eq!(invoice.header().kind(), DocumentKind::Invoice);
    }

    #[test]
    fn capability_is_fixed_by_variant() {
        let receipt: Document = Receipt::build(RecordFields::default(), None, &clock()).into();
        let invoice: Document =
            Invoice::build(RecordFields::default(), InvoiceLine::default(), &clock()).into();
        assert!(receipt.as_transaction().is_some());
        assert!(receipt.as_invoice_item().is_none());
        assert!(invoice.as_transaction().is_none());
        assert!(invoice.as_invoice_item().is_some());
    }

    #[test]
    fn require_amount_reports_unsupported_capability() {
        let invoice: Document =
            Invoice::build(RecordFields::default(), InvoiceLine::default(), &clock()).into();
        let err = invoice.require_amount().unwrap_err();
        assert!(matches!(
            err,
            RecordError::CapabilityNotSupported { kind: "Invoice", .. }
        ));
    }

    #[test]
    fn validate_rejects_negative_values() {
        let bill = Bill::build(RecordFields::default(), Some(Decimal::new(-1, 0)), &clock());
        assert!(matches!(
            bill.validate(),
            Err(RecordError::InvalidField { field: "total_amount", .. })
        ));
        let invoice = Invoice::build(
            RecordFields::default(),
            InvoiceLine {
                product: Some("Widget".into()),
                quantity: Some(-3),
            },
            &clock(),
        );
        assert!(Document::from(invoice).validate().is_err());
    }
}
