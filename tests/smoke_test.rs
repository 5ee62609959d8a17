use records_core::{
    catalog::{DocumentCollection, FreeSoftwareRegistry},
    domain::{Bill, Invoice, Receipt},
    init,
    render::Presenter,
};
use rust_decimal_macros::dec;

#[test]
fn collection_smoke() {
    init();

    let mut documents = DocumentCollection::new();
    documents.add(Receipt::with_amount(dec!(1.25)));
    documents.add(Invoice::with_quantity(2));
    documents.add(Bill::with_total(dec!(3.75)));

    let presenter = Presenter::default();
    let shown: Vec<_> = documents.iter().map(|doc| presenter.show(doc)).collect();
    assert_eq!(shown.len(), 3);
    assert!(shown.iter().all(|text| text.starts_with("Document Type: ")));
    assert_eq!(documents.total_amount(), dec!(5.00));

    let mut registry = FreeSoftwareRegistry::new();
    registry.register("Free Program", "Free Inc.");
    assert_eq!(registry.len(), 1);
}
