use tracing::info;

use crate::domain::{FreeSoftware, SoftwareFields};

/// Caller-owned record of every free software entry created through it.
#[derive(Debug, Clone, Default)]
pub struct FreeSoftwareRegistry {
    entries: Vec<FreeSoftware>,
}

impl FreeSoftwareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a free software entry and records it.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> FreeSoftware {
        self.register_with(SoftwareFields::new(name, manufacturer))
    }

    pub fn register_with(&mut self, fields: SoftwareFields) -> FreeSoftware {
        let software = FreeSoftware::build(fields);
        self.entries.push(software.clone());
        info!(
            name = software.info().name(),
            registered = self.entries.len(),
            "free software registered"
        );
        software
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FreeSoftware> {
        self.entries.iter()
    }

    /// Entries ordered by name.
    pub fn sorted(&self) -> Vec<&FreeSoftware> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort();
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FreeSoftwareRegistry {
    type Item = &'a FreeSoftware;
    type IntoIter = std::slice::Iter<'a, FreeSoftware>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
