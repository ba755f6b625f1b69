// SPDX-License-Identifier: MPL-2.0
//! The read-only, ordered list of documents shown by the gallery.

use super::types::DocumentRecord;

/// Ordered, fixed-size collection of document records.
///
/// A catalog is built once (from the built-in list or a manifest) and never
/// mutated afterwards. Positions into it are stable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    records: Vec<DocumentRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&DocumentRecord> {
        self.records.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.records.iter()
    }
}

impl FromIterator<DocumentRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = DocumentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
