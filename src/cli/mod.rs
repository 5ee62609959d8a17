//! Sample walkthrough printed by `records_core_cli`.

pub mod output;

use std::io::Write;

use chrono::{Duration, Months};
use rust_decimal::Decimal;

use crate::catalog::{DocumentCollection, FreeSoftwareRegistry, SoftwareCatalog};
use crate::domain::{
    Bill, Clock, CommercialSoftware, ConditionalFreeSoftware, FreeSoftware, Invoice, Receipt,
    Software, UsabilityEvaluable,
};
use crate::errors::Result;
use crate::render::{Field, Presenter};

use output::Output;

pub const BUILD_HASH: &str = env!("RECORDS_CORE_BUILD_HASH");
pub const BUILD_STATUS: &str = env!("RECORDS_CORE_BUILD_STATUS");
pub const BUILD_TIMESTAMP: &str = env!("RECORDS_CORE_BUILD_TIMESTAMP");
pub const BUILD_PROFILE: &str = env!("RECORDS_CORE_BUILD_PROFILE");

pub fn banner() -> String {
    format!(
        "Records Core v{} ({} {}, {} build, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_HASH,
        BUILD_STATUS,
        BUILD_PROFILE,
        BUILD_TIMESTAMP
    )
}

/// Documents from the walkthrough, all dated at the clock's current instant.
pub fn sample_documents(clock: &dyn Clock) -> DocumentCollection {
    let now = clock.now();
    let mut documents = DocumentCollection::new();
    documents.add(Receipt::new("Issuer1", "Recipient1", now, Decimal::new(10050, 2)));
    documents.add(Invoice::new("Issuer2", "Recipient2", now, "Product1", 5));
    documents.add(Bill::new("Issuer3", "Recipient3", now, Decimal::new(50075, 2)));
    documents
}

/// One entry per license variant: a trial ten days into fifteen, and a
/// commercial licence two months into ninety days.
pub fn sample_software(clock: &dyn Clock) -> SoftwareCatalog {
    let now = clock.now();
    let commercial_installed = now.checked_sub_months(Months::new(2)).unwrap_or(now);
    let mut catalog = SoftwareCatalog::new();
    catalog.add(FreeSoftware::new("Free Program", "Free Inc."));
    catalog.add(ConditionalFreeSoftware::new(
        "Trial Program",
        "Trial Ltd.",
        now - Duration::days(10),
        Duration::days(15),
    ));
    catalog.add(CommercialSoftware::new(
        "Commercial Program",
        "Commercial Corp.",
        Decimal::new(9999, 2),
        commercial_installed,
        Duration::days(90),
    ));
    catalog
}

/// Prints documents, transaction amounts, the software database and the
/// free-software registry. Trial entries are released whether or not the
/// output succeeds.
pub fn run<W: Write>(sink: &mut W, presenter: &Presenter, clock: &dyn Clock) -> Result<()> {
    let mut out = Output::new(sink, presenter.options.screen_reader_mode);
    let catalog = sample_software(clock);
    let outcome = print_walkthrough(&mut out, presenter, clock, &catalog);
    release_trials(catalog);
    outcome
}

fn print_walkthrough<W: Write>(
    out: &mut Output<'_, W>,
    presenter: &Presenter,
    clock: &dyn Clock,
    catalog: &SoftwareCatalog,
) -> Result<()> {
    out.banner(banner())?;

    let documents = sample_documents(clock);
    out.section("Documents")?;
    for document in &documents {
        out.info(presenter.show(document))?;
        out.blank_line()?;
    }

    out.section("Transaction Amounts")?;
    for (_, amount) in documents.transactions() {
        out.info(presenter.lines(&[Field::money("Amount", amount)]).join(""))?;
    }
    out.info(presenter.lines(&[Field::money("Total", documents.total_amount())]).join(""))?;

    let as_of = clock.now();
    out.section("Software Database")?;
    for software in catalog.iter() {
        out.info(presenter.show(software))?;
        let usable = Field::flag("Usable", software.is_usable_at(as_of));
        out.info(presenter.lines(&[usable]).join(""))?;
        out.blank_line()?;
    }

    let mut registry = FreeSoftwareRegistry::new();
    registry.register("Free Program", "Free Inc.");
    out.section("Free Software List")?;
    for software in &registry {
        out.info(presenter.show(software))?;
        out.blank_line()?;
    }
    Ok(())
}

/// Releases every trial entry in `catalog`, returning how many were released.
pub fn release_trials(catalog: SoftwareCatalog) -> usize {
    let mut released = 0;
    for software in catalog {
        if let Software::ConditionalFree(trial) = software {
            trial.release();
            released += 1;
        }
    }
    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn walkthrough_lists_every_section() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap());
        let presenter = Presenter::default();
        let mut buffer = Vec::new();
        run(&mut buffer, &presenter, &clock).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Document Type: Receipt"));
        assert!(text.contains("Amount: $100.50"));
        assert!(text.contains("Total Amount: $500.75"));
        assert!(text.contains("Total: $601.25"));
        assert!(text.contains("Trial Period: 15 days"));
        assert_eq!(text.matches("Usable: true").count(), 3);
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap());
        let err = run(&mut BrokenSink, &Presenter::default(), &clock).unwrap_err();
        assert!(matches!(err, crate::RecordError::Io(_)));
    }

    #[test]
    fn sample_catalog_releases_its_trial() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap());
        assert_eq!(release_trials(sample_software(&clock)), 1);
    }
}
