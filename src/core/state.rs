//! # Pager State
//!
//! Core pager state. Domain logic only, no TUI types. Presentation state
//! lives in the `tui` module.
//!
//! ```text
//! Pager
//! ├── current_page: usize     // 1-based, 0 only when total_pages is 0
//! ├── total_pages: usize      // 0 = nothing to paginate
//! ├── budget: DisplayBudget   // margin/center page counts
//! ├── ellipsis: String        // glyph for hidden runs
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::range::{DEFAULT_ELLIPSIS, DisplayBudget, PageRange, RangeError, compute_range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub total_pages: usize,
    pub budget: DisplayBudget,
    pub ellipsis: String,
    pub status_message: String,
}

impl Pager {
    /// Build a pager, clamping `current_page` into `[1, total_pages]`.
    pub fn new(current_page: usize, total_pages: usize, budget: DisplayBudget) -> Self {
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
            budget,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            status_message: String::new(),
        }
    }

    pub fn from_config(current_page: usize, total_pages: usize, config: &ResolvedConfig) -> Self {
        let mut pager = Self::new(current_page, total_pages, config.budget);
        pager.ellipsis = config.ellipsis.clone();
        pager
    }

    pub fn range(&self) -> Result<PageRange, RangeError> {
        compute_range(self.current_page, self.total_pages, self.budget)
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// Clamp a requested page into `[1, total]`. Returns 0 when `total` is 0.
pub fn clamp_page(page: usize, total: usize) -> usize {
    if total == 0 { 0 } else { page.clamp(1, total) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pager;

    #[test]
    fn test_pager_new_clamps_current() {
        assert_eq!(Pager::new(99, 10, DisplayBudget::default()).current_page, 10);
        assert_eq!(Pager::new(0, 10, DisplayBudget::default()).current_page, 1);
        assert_eq!(Pager::new(5, 0, DisplayBudget::default()).current_page, 0);
    }

    #[test]
    fn test_pager_defaults() {
        let pager = test_pager(15, 30);
        assert_eq!(pager.ellipsis, "…");
        assert!(pager.status_message.is_empty());
        assert!(!pager.is_empty());
    }

    #[test]
    fn test_pager_range() {
        let pager = test_pager(15, 30);
        let range = pager.range().unwrap();
        assert_eq!(range.current(), 15);
        assert_eq!(range.ellipsis_count(), 2);
    }

    #[test]
    fn test_empty_pager_range_is_no_pages() {
        let pager = test_pager(1, 0);
        assert!(pager.is_empty());
        assert_eq!(pager.range(), Err(RangeError::NoPages));
    }
}
