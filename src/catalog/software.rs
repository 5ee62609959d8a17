use chrono::{DateTime, Utc};

use crate::domain::{NamedEntity, Software, UsabilityEvaluable};
use crate::errors::Result;

/// Usability of one catalog entry at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsabilityStatus {
    pub name: String,
    pub usable: bool,
}

/// Ordered collection of software entries of any license variant.
#[derive(Debug, Clone, Default)]
pub struct SoftwareCatalog {
    entries: Vec<Software>,
}

impl SoftwareCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, software: impl Into<Software>) {
        self.entries.push(software.into());
    }

    pub fn add_validated(&mut self, software: impl Into<Software>) -> Result<()> {
        let software = software.into();
        software.validate()?;
        self.entries.push(software);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Software> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates every entry against `as_of`.
    pub fn usability_report(&self, as_of: DateTime<Utc>) -> Vec<UsabilityStatus> {
        self.entries
            .iter()
            .map(|software| UsabilityStatus {
                name: software.name().to_string(),
                usable: software.is_usable_at(as_of),
            })
            .collect()
    }

    pub fn usable_at(&self, as_of: DateTime<Utc>) -> impl Iterator<Item = &Software> {
        self.entries
            .iter()
            .filter(move |software| software.is_usable_at(as_of))
    }
}

impl FromIterator<Software> for SoftwareCatalog {
    fn from_iter<I: IntoIterator<Item = Software>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SoftwareCatalog {
    type Item = Software;
    type IntoIter = std::vec::IntoIter<Software>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
