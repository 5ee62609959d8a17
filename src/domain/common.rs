//! Shared traits and time utilities for document and software records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::render::Field;

/// Exposes a stable identifier for stored records.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Turns a record into an ordered list of labelled fields.
///
/// Shared fields are always emitted before the variant's own fields; implementors
/// only supply the two halves and never override `render`.
pub trait Displayable {
    fn shared_fields(&self) -> Vec<Field>;

    fn extra_fields(&self) -> Vec<Field>;

    fn render(&self) -> Vec<Field> {
        let mut fields = self.shared_fields();
        fields.extend(self.extra_fields());
        fields
    }
}

/// Clock abstracts access to the current timestamp so construction defaults and
/// usability checks remain deterministic in tests.
pub trait Clock {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
