pub mod common;
pub mod document;
pub mod record;
pub mod software;
pub mod usability;

pub use common::{Clock, Displayable, FixedClock, Identifiable, NamedEntity, SystemClock};
pub use document::{Bill, Document, Invoice, InvoiceItem, InvoiceLine, Receipt, Transactional};
pub use record::{DocumentKind, RecordFields, RecordHeader, DEFAULT_ISSUER, DEFAULT_RECIPIENT};
pub use software::{
    CommercialSoftware, CommercialTerms, ConditionalFreeSoftware, FormatKey, FreeSoftware,
    Software, SoftwareFields, SoftwareInfo, SoftwareKind, TrialTerms,
};
pub use usability::{is_usable, UsabilityEvaluable};

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
