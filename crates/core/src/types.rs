//! Shared value types for pagination and presentation
//!
//! This module contains the page/pagination vocabulary, the responsive size
//! classes windows report, and the three-state sort direction used by
//! sortable column headers.

use serde::{Deserialize, Serialize};

// ============================================================================
// PageRequest
// ============================================================================

/// A request for one page of a data set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page_idx: usize,

    /// Number of items per page (must be non-zero by the time it is used)
    pub page_size: usize,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page_idx: usize, page_size: usize) -> Self {
        Self {
            page_idx,
            page_size,
        }
    }

    /// Index of the first item this request covers
    pub fn offset(&self) -> usize {
        self.page_idx * self.page_size
    }
}

// ============================================================================
// Page
// ============================================================================

/// One materialized page of entities plus data-set totals
///
/// Invariants: `page_count == ceil(total / page_size)` with a floor of 1,
/// and `items.len() <= page_size`. A page index past the end of the data
/// set yields a legal, empty trailing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    /// The entities on this page, in data-set order
    pub items: Vec<E>,

    /// Zero-based index of this page
    pub page_idx: usize,

    /// Page size the data set was cut into
    pub page_size: usize,

    /// Total number of entities across all pages
    pub total: usize,

    /// Total number of pages (at least 1)
    pub page_count: usize,
}

impl<E> Page<E> {
    /// Assemble a page from its items, the request that produced it and the
    /// data-set total
    pub fn new(items: Vec<E>, request: PageRequest, total: usize) -> Self {
        Self {
            items,
            page_idx: request.page_idx,
            page_size: request.page_size,
            total,
            page_count: page_count(total, request.page_size),
        }
    }

    /// Check whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One-based ordinal of the first item on this page (0 when empty)
    pub fn first_item_ordinal(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page_idx * self.page_size + 1
        }
    }

    /// One-based ordinal of the last item on this page (0 when empty)
    pub fn last_item_ordinal(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page_idx * self.page_size + self.items.len()
        }
    }

    /// Check whether a page follows this one
    pub fn has_next(&self) -> bool {
        self.page_idx + 1 < self.page_count
    }

    /// Check whether a page precedes this one
    pub fn has_prev(&self) -> bool {
        self.page_idx > 0
    }
}

/// Number of pages a data set of `total` items cuts into (floor 1)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

// ============================================================================
// SizeClass
// ============================================================================

/// Horizontal size class a window reports
///
/// Data views use this to pick between table and card styles when the
/// caller leaves the style on automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeClass {
    /// Phone-width windows
    Compact,
    /// Tablet-width windows
    #[default]
    Medium,
    /// Desktop-width windows
    Expanded,
}

impl SizeClass {
    /// Check whether this is the compact class
    pub fn is_compact(&self) -> bool {
        matches!(self, SizeClass::Compact)
    }
}

// ============================================================================
// SortDirection
// ============================================================================

/// Three-state sort direction for sortable column headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Source order
    #[default]
    None,
    /// Ascending by the column comparator
    Ascending,
    /// Descending by the column comparator
    Descending,
}

impl SortDirection {
    /// Advance to the next state in the unsorted -> ascending -> descending
    /// cycle
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Icon name the header button shows for this state
    pub fn icon(&self) -> &'static str {
        match self {
            SortDirection::None => "arrows-up-down",
            SortDirection::Ascending => "arrow-up",
            SortDirection::Descending => "arrow-down",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 50), 1);
        assert_eq!(page_count(1, 50), 1);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(51, 50), 2);
        assert_eq!(page_count(125, 50), 3);
        assert_eq!(page_count(10, 0), 1);
    }

    #[test]
    fn test_page_ordinals() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(2, 10), 23);
        assert_eq!(page.first_item_ordinal(), 21);
        assert_eq!(page.last_item_ordinal(), 23);
        assert_eq!(page.page_count, 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_empty_page_ordinals() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(page.first_item_ordinal(), 0);
        assert_eq!(page.last_item_ordinal(), 0);
        assert_eq!(page.page_count, 1);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_empty_trailing_page() {
        // A stale page index past the end is legal and simply empty.
        let page: Page<i32> = Page::new(vec![], PageRequest::new(5, 10), 23);
        assert!(page.is_empty());
        assert_eq!(page.page_count, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_sort_direction_cycle() {
        let d = SortDirection::None;
        let d = d.toggled();
        assert_eq!(d, SortDirection::Ascending);
        let d = d.toggled();
        assert_eq!(d, SortDirection::Descending);
        let d = d.toggled();
        assert_eq!(d, SortDirection::None);
    }

    #[test]
    fn test_sort_direction_icons_distinct() {
        let icons = [
            SortDirection::None.icon(),
            SortDirection::Ascending.icon(),
            SortDirection::Descending.icon(),
        ];
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
        assert_ne!(icons[0], icons[2]);
    }

    #[test]
    fn test_size_class() {
        assert!(SizeClass::Compact.is_compact());
        assert!(!SizeClass::Medium.is_compact());
        assert_eq!(SizeClass::default(), SizeClass::Medium);
    }
}
