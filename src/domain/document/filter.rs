// SPDX-License-Identifier: MPL-2.0
//! Search and category filtering for the document catalog.
//!
//! # Available Filters
//!
//! - [`CategoryFilter`]: Restrict to certifications, offer letters, or all
//! - [`FilterState`]: Free-text query combined with a category, AND logic
//!
//! [`filtered_view`] derives the ordered subset of the catalog matching a
//! [`FilterState`]. It is a pure function: the same inputs always give the
//! same view, and the view is never stored independently of its inputs.

use super::catalog::Catalog;
use super::types::{DocumentCategory, DocumentRecord, ParseCategoryError};
use std::str::FromStr;

// =============================================================================
// Category Filter
// =============================================================================

/// Category selector shown next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every document.
    #[default]
    All,
    /// Show only certifications.
    Certification,
    /// Show only offer letters.
    Offer,
}

impl CategoryFilter {
    /// Selector options in display order.
    pub const ALL: [CategoryFilter; 3] = [Self::All, Self::Certification, Self::Offer];

    /// Returns `true` if a document of `category` passes this filter.
    #[must_use]
    pub fn matches_category(&self, category: DocumentCategory) -> bool {
        match self {
            Self::All => true,
            Self::Certification => category == DocumentCategory::Certification,
            Self::Offer => category == DocumentCategory::Offer,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Stable identifier used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Certification => "certification",
            Self::Offer => "offer",
        }
    }
}

impl From<DocumentCategory> for CategoryFilter {
    fn from(category: DocumentCategory) -> Self {
        match category {
            DocumentCategory::Certification => Self::Certification,
            DocumentCategory::Offer => Self::Offer,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<DocumentCategory>().map(Self::from)
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Current search text and category selection.
///
/// Mutated by user input only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text query matched against titles.
    pub query: String,
    /// Category selection.
    pub category: CategoryFilter,
}

impl FilterState {
    /// Creates a filter with no active criteria (matches all documents).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter starting from the given category.
    #[must_use]
    pub fn with_category(category: CategoryFilter) -> Self {
        Self {
            query: String::new(),
            category,
        }
    }

    /// Returns `true` if `record` passes both the query and the category.
    ///
    /// The query is a case-insensitive substring test on the title. An empty
    /// query matches every title.
    #[must_use]
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        self.matches_folded(record, &self.query.to_lowercase())
    }

    fn matches_folded(&self, record: &DocumentRecord, needle: &str) -> bool {
        record.title_folded().contains(needle) && self.category.matches_category(record.category())
    }

    /// Returns `true` if any criterion narrows the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category.is_active()
    }

    /// Resets the query and the category.
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
    }
}

// =============================================================================
// Filtered View
// =============================================================================

/// Ordered subsequence of the catalog matching a [`FilterState`].
///
/// Holds catalog positions rather than records, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// Catalog positions of the matching records, in catalog order.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Catalog position of the `index`-th visible record.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// View index at which catalog position `position` is shown, if visible.
    #[must_use]
    pub fn index_of(&self, position: usize) -> Option<usize> {
        self.positions.binary_search(&position).ok()
    }

    /// Visible records paired with their view index.
    pub fn records<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (usize, &'a DocumentRecord)> + 'a {
        self.positions
            .iter()
            .enumerate()
            .filter_map(move |(index, &position)| catalog.get(position).map(|r| (index, r)))
    }

    /// Record at view index `index`.
    #[must_use]
    pub fn record<'a>(&self, catalog: &'a Catalog, index: usize) -> Option<&'a DocumentRecord> {
        self.get(index).and_then(|position| catalog.get(position))
    }
}

/// Derives the filtered view of `catalog` for `filter`.
///
/// Stable: catalog order is preserved and nothing is re-sorted.
#[must_use]
pub fn filtered_view(catalog: &Catalog, filter: &FilterState) -> FilteredView {
    let needle = filter.query.to_lowercase();
    let positions = catalog
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches_folded(record, &needle))
        .map(|(position, _)| position)
        .collect();
    FilteredView { positions }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            DocumentRecord::new(
                "Certification in Web Development",
                DocumentCategory::Certification,
                "docs/certificate1.jpg",
                "docs/certificate1.pdf",
            ),
            DocumentRecord::new(
                "Offer Letter - Company XYZ",
                DocumentCategory::Offer,
                "docs/offerletter1.jpg",
                "docs/offerletter1.pdf",
            ),
            DocumentRecord::new(
                "Certification in Python",
                DocumentCategory::Certification,
                "docs/certificate2.jpg",
                "docs/certificate2.pdf",
            ),
            DocumentRecord::new(
                "Offer Letter - Company ABC",
                DocumentCategory::Offer,
                "docs/offerletter2.jpg",
                "docs/offerletter2.pdf",
            ),
        ])
    }

    fn titles<'a>(catalog: &'a Catalog, view: &'a FilteredView) -> Vec<&'a str> {
        view.records(catalog).map(|(_, r)| r.title()).collect()
    }

    // -------------------------------------------------------------------------
    // CategoryFilter tests
    // -------------------------------------------------------------------------

    #[test]
    fn category_filter_all_matches_everything() {
        let filter = CategoryFilter::All;
        assert!(filter.matches_category(DocumentCategory::Certification));
        assert!(filter.matches_category(DocumentCategory::Offer));
        assert!(!filter.is_active());
    }

    #[test]
    fn category_filter_offer_only() {
        let filter = CategoryFilter::Offer;
        assert!(!filter.matches_category(DocumentCategory::Certification));
        assert!(filter.matches_category(DocumentCategory::Offer));
        assert!(filter.is_active());
    }

    #[test]
    fn category_filter_parses_all_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("certification".parse::<CategoryFilter>(), Ok(CategoryFilter::Certification));
        assert_eq!("offer".parse::<CategoryFilter>(), Ok(CategoryFilter::Offer));
        assert!("letters".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn category_options_are_in_display_order() {
        assert_eq!(
            CategoryFilter::ALL,
            [
                CategoryFilter::All,
                CategoryFilter::Certification,
                CategoryFilter::Offer
            ]
        );
    }

    // -------------------------------------------------------------------------
    // filtered_view tests
    // -------------------------------------------------------------------------

    #[test]
    fn default_filter_shows_whole_catalog() {
        let catalog = sample_catalog();
        let view = filtered_view(&catalog, &FilterState::default());
        assert_eq!(view.positions(), &[0, 1, 2, 3]);
    }

    #[test]
    fn offer_category_keeps_both_offers_in_order() {
        let catalog = sample_catalog();
        let filter = FilterState::with_category(CategoryFilter::Offer);
        let view = filtered_view(&catalog, &filter);

        assert_eq!(
            titles(&catalog, &view),
            vec!["Offer Letter - Company XYZ", "Offer Letter - Company ABC"]
        );
    }

    #[test]
    fn query_matches_titles_case_insensitively() {
        let catalog = sample_catalog();
        for query in ["python", "PYTHON", "PyThOn"] {
            let filter = FilterState {
                query: query.to_string(),
                category: CategoryFilter::All,
            };
            let view = filtered_view(&catalog, &filter);
            assert_eq!(titles(&catalog, &view), vec!["Certification in Python"]);
        }
    }

    #[test]
    fn query_and_category_are_conjunctive() {
        let catalog = sample_catalog();
        let filter = FilterState {
            query: "company".to_string(),
            category: CategoryFilter::Certification,
        };
        assert!(filtered_view(&catalog, &filter).is_empty());

        let filter = FilterState {
            query: "certification".to_string(),
            category: CategoryFilter::Certification,
        };
        assert_eq!(filtered_view(&catalog, &filter).positions(), &[0, 2]);
    }

    #[test]
    fn unmatched_query_yields_empty_view() {
        let catalog = sample_catalog();
        let filter = FilterState {
            query: "zzz".to_string(),
            category: CategoryFilter::All,
        };
        let view = filtered_view(&catalog, &filter);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(view.record(&catalog, 0).is_none());
    }

    #[test]
    fn view_is_ordered_subsequence_for_every_filter() {
        let catalog = sample_catalog();
        let queries = ["", "o", "letter", "in ", "XYZ", "zzz", " - "];
        for query in queries {
            for category in CategoryFilter::ALL {
                let filter = FilterState {
                    query: query.to_string(),
                    category,
                };
                let view = filtered_view(&catalog, &filter);
                assert!(
                    view.positions().windows(2).all(|w| w[0] < w[1]),
                    "positions must be strictly increasing for {filter:?}"
                );
                assert!(view.positions().iter().all(|&p| p < catalog.len()));
                for (_, record) in view.records(&catalog) {
                    assert!(filter.matches(record));
                }
                let matching = catalog.iter().filter(|r| filter.matches(r)).count();
                assert_eq!(view.len(), matching);
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_catalog();
        let filter = FilterState {
            query: "Offer".to_string(),
            category: CategoryFilter::All,
        };
        assert_eq!(
            filtered_view(&catalog, &filter),
            filtered_view(&catalog, &filter)
        );
    }

    #[test]
    fn index_of_maps_catalog_position_back_to_view() {
        let catalog = sample_catalog();
        let view = filtered_view(&catalog, &FilterState::with_category(CategoryFilter::Offer));
        assert_eq!(view.index_of(3), Some(1));
        assert_eq!(view.index_of(0), None);
        assert_eq!(view.get(0), Some(1));
    }

    #[test]
    fn clear_resets_query_and_category() {
        let mut filter = FilterState {
            query: "python".to_string(),
            category: CategoryFilter::Offer,
        };
        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter, FilterState::default());
    }
}
