use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Displayable, Document, Identifiable};
use crate::errors::Result;
use crate::render::Field;

/// Ordered, heterogeneous sequence of documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentCollection {
    #[serde(default)]
    documents: Vec<Document>,
}

impl DocumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, document: impl Into<Document>) -> Uuid {
        let document = document.into();
        let id = document.id();
        self.documents.push(document);
        id
    }

    /// Adds the document only if its amounts and quantities are in range.
    pub fn add_validated(&mut self, document: impl Into<Document>) -> Result<Uuid> {
        let document = document.into();
        document.validate()?;
        Ok(self.add(document))
    }

    pub fn document(&self, id: Uuid) -> Option<&Document> {
        self.documents.iter().find(|document| document.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Rendered fields of every document, in insertion order.
    pub fn render_all(&self) -> Vec<Vec<Field>> {
        self.documents.iter().map(|document| document.render()).collect()
    }

    /// Documents that carry a transaction amount, paired with that amount.
    pub fn transactions(&self) -> impl Iterator<Item = (&Document, Decimal)> {
        self.documents
            .iter()
            .filter_map(|document| document.try_amount().map(|amount| (document, amount)))
    }

    pub fn transaction_amounts(&self) -> Vec<Decimal> {
        self.transactions().map(|(_, amount)| amount).collect()
    }

    pub fn total_amount(&self) -> Decimal {
        self.transactions().map(|(_, amount)| amount).sum()
    }
}

impl FromIterator<Document> for DocumentCollection {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentCollection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
