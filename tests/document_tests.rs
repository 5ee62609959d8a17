use chrono::{TimeZone, Utc};
use records_core::{
    catalog::DocumentCollection,
    domain::{
        Bill, Displayable, Document, DocumentKind, FixedClock, Invoice, InvoiceItem, InvoiceLine,
        Receipt, RecordFields, Transactional, DEFAULT_ISSUER, DEFAULT_RECIPIENT,
    },
    RecordError,
};
use rust_decimal_macros::dec;

fn issued() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

fn mixed_collection() -> DocumentCollection {
    let mut documents = DocumentCollection::new();
    documents.add(Receipt::new("Issuer1", "Recipient1", issued(), dec!(100.50)));
    documents.add(Invoice::new("Issuer2", "Recipient2", issued(), "Product1", 5));
    documents.add(Bill::new("Issuer3", "Recipient3", issued(), dec!(500.75)));
    documents
}

#[test]
fn shared_fields_render_before_variant_fields() {
    let expected_extra: [&[&str]; 3] = [&["Amount"], &["Product", "Quantity"], &["Total Amount"]];
    for (document, extra) in mixed_collection().iter().zip(expected_extra) {
        let labels: Vec<_> = document.render().iter().map(|field| field.label).collect();
        assert_eq!(&labels[..4], ["Document Type", "Issuer", "Recipient", "Date"]);
        assert_eq!(&labels[4..], extra);
    }
}

#[test]
fn transaction_amounts_are_exact() {
    let documents = mixed_collection();
    let amounts: Vec<_> = documents.iter().map(Document::try_amount).collect();
    assert_eq!(amounts, vec![Some(dec!(100.50)), None, Some(dec!(500.75))]);
    assert_eq!(documents.transaction_amounts(), vec![dec!(100.50), dec!(500.75)]);
    assert_eq!(documents.total_amount(), dec!(601.25));
}

#[test]
fn invoice_has_no_transaction_amount() {
    let invoice: Document = Invoice::new("Issuer2", "Recipient2", issued(), "Product1", 5).into();
    assert_eq!(invoice.try_amount(), None);
    assert!(invoice.as_transaction().is_none());
    assert!(matches!(
        invoice.require_amount(),
        Err(RecordError::CapabilityNotSupported { .. })
    ));
}

#[test]
fn explicit_fields_read_back_unchanged() {
    let receipt = Receipt::new("Issuer1", "Recipient1", issued(), dec!(0.10));
    assert_eq!(receipt.header().issuer(), "Issuer1");
    assert_eq!(receipt.header().recipient(), "Recipient1");
    assert_eq!(receipt.header().issued_at(), issued());
    assert_eq!(receipt.header().kind(), DocumentKind::Receipt);
    assert_eq!(receipt.amount(), dec!(0.10));

    let invoice = Invoice::new("A", "B", issued(), "Widget", 12);
    assert_eq!(invoice.product(), "Widget");
    assert_eq!(invoice.quantity(), 12);
}

#[test]
fn bill_with_only_total_uses_defaults() {
    let clock = FixedClock(issued());
    let bill = Bill::build(RecordFields::default(), Some(dec!(42.00)), &clock);
    assert_eq!(bill.header().kind(), DocumentKind::Bill);
    assert_eq!(bill.header().issuer(), DEFAULT_ISSUER);
    assert_eq!(bill.header().recipient(), DEFAULT_RECIPIENT);
    assert_eq!(bill.header().issued_at(), issued());
    assert_eq!(bill.amount(), dec!(42.00));
}

#[test]
fn shorthand_constructors_stamp_current_time() {
    let before = Utc::now();
    let bill = Bill::with_total(dec!(10));
    let after = Utc::now();
    assert_eq!(bill.header().issuer(), DEFAULT_ISSUER);
    assert!(bill.header().issued_at() >= before && bill.header().issued_at() <= after);

    let invoice = Invoice::with_quantity(3);
    assert_eq!(invoice.product(), "");
    assert_eq!(invoice.quantity(), 3);
}

#[test]
fn partial_payload_defaults_to_zero() {
    let clock = FixedClock(issued());
    let receipt = Receipt::build(RecordFields::default(), None, &clock);
    assert_eq!(receipt.amount(), dec!(0));
    let invoice = Invoice::build(
        RecordFields {
            issuer: Some("Shop".into()),
            ..RecordFields::default()
        },
        InvoiceLine::default(),
        &clock,
    );
    assert_eq!(invoice.header().issuer(), "Shop");
    assert_eq!(invoice.header().recipient(), DEFAULT_RECIPIENT);
    assert_eq!(invoice.quantity(), 0);
}

#[test]
fn negative_amounts_are_accepted_unless_validated() {
    let mut documents = DocumentCollection::new();
    documents.add(Receipt::new("A", "B", issued(), dec!(-5)));
    assert_eq!(documents.len(), 1);

    let err = documents
        .add_validated(Receipt::new("A", "B", issued(), dec!(-5)))
        .unwrap_err();
    assert!(matches!(err, RecordError::InvalidField { field: "amount", .. }));
    assert_eq!(documents.len(), 1);
}

#[test]
fn documents_are_found_by_id() {
    let mut documents = DocumentCollection::new();
    let id = documents.add(Bill::new("A", "B", issued(), dec!(1)));
    assert_eq!(documents.document(id).map(Document::kind), Some(DocumentKind::Bill));
}

#[test]
fn documents_serialize_with_variant_tag() {
    let document: Document = Receipt::new("Issuer1", "Recipient1", issued(), dec!(100.50)).into();
    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["Receipt"]["amount"], "100.50");
    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, document);
}
