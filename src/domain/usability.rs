//! Time-window usability rules for software entries.

use chrono::{DateTime, Duration, Utc};

use crate::domain::common::Clock;

/// Entries whose usability depends on the instant they are queried at.
///
/// Nothing is cached: every call recomputes against the supplied instant.
pub trait UsabilityEvaluable {
    /// First instant at which the entry is no longer usable. `None` means it
    /// never expires.
    fn expires_at(&self) -> Option<DateTime<Utc>>;

    /// Usable strictly before the expiry instant; the boundary itself is not.
    fn is_usable_at(&self, as_of: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(end) => as_of < end,
            None => true,
        }
    }

    fn is_usable(&self, clock: &dyn Clock) -> bool {
        self.is_usable_at(clock.now())
    }
}

/// End of a usage window. An end past the representable range never expires;
/// one before it has always expired.
pub fn window_end(installed_at: DateTime<Utc>, period: Duration) -> Option<DateTime<Utc>> {
    match installed_at.checked_add_signed(period) {
        Some(end) => Some(end),
        None if period > Duration::zero() => None,
        None => Some(DateTime::<Utc>::MIN_UTC),
    }
}

/// Evaluates any entry as of `as_of`.
pub fn is_usable<T: UsabilityEvaluable + ?Sized>(entry: &T, as_of: DateTime<Utc>) -> bool {
    entry.is_usable_at(as_of)
}
