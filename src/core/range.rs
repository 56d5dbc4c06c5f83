//! # Page Range
//!
//! Computes which page numbers a pager shows, and where the ellipses go.
//!
//! ```text
//!            left-range
//!           |-----------|
//!                  right-range
//!                 |-----------|
//!         ‹ 1  2  3 4[5]6  7  8  ›
//!         ‹ 1  2  3 4[5]6 ... 9  ›
//!         ‹ 1 ... 4[5]6 7  8  9  ›
//!         ‹ 1 ... 24[25]26 27 ... 30 ›
//!         ‹ 1 ... 25[26]27 28 29  30 ›
//!          |-|               |-|
//!      left-margin       right-margin
//! ```
//!
//! With `margin = m` and `center = c`, a range never holds more than
//! `2m + c + 2` slots. Up to that many pages, every page is listed.
//!
//! Everything here is pure: same inputs, same range.

use std::fmt;

/// Pages always shown at each end by default.
pub const DEFAULT_MARGIN_PAGES: usize = 1;
/// Pages shown around the current page by default.
pub const DEFAULT_CENTER_PAGES: usize = 4;
/// Default ellipsis glyph.
pub const DEFAULT_ELLIPSIS: &str = "…";

/// Below this, the middle-range center run can miss the current page.
pub const MIN_CENTER_PAGES: usize = 2;

const PREV_MARKER: &str = "‹";
const NEXT_MARKER: &str = "›";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The display budget cannot produce a well-formed range.
    InvalidConfiguration(String),
    /// `total_pages` is zero. Nothing to paginate.
    NoPages,
    /// `current_page` lies outside `[1, total_pages]`.
    InvalidArgument { current: usize, total: usize },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidConfiguration(reason) => {
                write!(f, "invalid display budget: {reason}")
            }
            RangeError::NoPages => write!(f, "no pages to paginate"),
            RangeError::InvalidArgument { current, total } => {
                write!(f, "page {current} is outside 1..={total}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

// ============================================================================
// Display Budget
// ============================================================================

/// How many page slots a pager may spend, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBudget {
    margin_pages: usize,
    center_pages: usize,
}

impl DisplayBudget {
    pub fn new(margin_pages: usize, center_pages: usize) -> Result<Self, RangeError> {
        if center_pages < MIN_CENTER_PAGES {
            return Err(RangeError::InvalidConfiguration(format!(
                "center pages must be at least {MIN_CENTER_PAGES}, got {center_pages}"
            )));
        }
        let fits = margin_pages
            .checked_mul(2)
            .and_then(|m| m.checked_add(center_pages))
            .and_then(|n| n.checked_add(2))
            .is_some();
        if !fits {
            return Err(RangeError::InvalidConfiguration(format!(
                "{margin_pages} margin pages and {center_pages} center pages overflow the page count"
            )));
        }
        Ok(Self {
            margin_pages,
            center_pages,
        })
    }

    pub fn margin_pages(&self) -> usize {
        self.margin_pages
    }

    pub fn center_pages(&self) -> usize {
        self.center_pages
    }

    /// Largest page count that is still listed in full, without ellipsis.
    ///
    /// Cannot overflow: `new` rejects budgets where it would.
    pub fn max_full_listing(&self) -> usize {
        2 * self.margin_pages + self.center_pages + 2
    }
}

impl Default for DisplayBudget {
    fn default() -> Self {
        Self {
            margin_pages: DEFAULT_MARGIN_PAGES,
            center_pages: DEFAULT_CENTER_PAGES,
        }
    }
}

// ============================================================================
// Slots and Ranges
// ============================================================================

/// One renderable unit of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Page(usize),
    Ellipsis,
}

/// The ordered slots for one render, plus the inputs needed to decorate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    slots: Vec<Slot>,
    current: usize,
    total: usize,
}

impl PageRange {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Page numbers in display order, ellipses skipped.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Page(page) => Some(*page),
            Slot::Ellipsis => None,
        })
    }

    pub fn ellipsis_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Ellipsis))
            .count()
    }

    /// Whether the "previous" control is shown.
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether the "next" control is shown.
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn is_current(&self, slot: Slot) -> bool {
        slot == Slot::Page(self.current)
    }

    /// One-line text form, e.g. `‹ 1 … 14 [15] 16 17 … 30 ›`.
    pub fn to_text(&self, ellipsis: &str) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.slots.len() + 2);
        if self.has_prev() {
            parts.push(PREV_MARKER.to_string());
        }
        for &slot in &self.slots {
            parts.push(match slot {
                Slot::Page(page) if self.is_current(slot) => format!("[{page}]"),
                Slot::Page(page) => page.to_string(),
                Slot::Ellipsis => ellipsis.to_string(),
            });
        }
        if self.has_next() {
            parts.push(NEXT_MARKER.to_string());
        }
        parts.join(" ")
    }
}

// ============================================================================
// Computation
// ============================================================================

/// Compute the slots to show for `current_page` out of `total_pages`.
///
/// Fails when there is nothing to paginate or when `current_page` is out of
/// bounds. Callers that want the "render an empty pager" behavior can map
/// any error to an empty display.
pub fn compute_range(
    current_page: usize,
    total_pages: usize,
    budget: DisplayBudget,
) -> Result<PageRange, RangeError> {
    if total_pages == 0 {
        return Err(RangeError::NoPages);
    }
    if current_page == 0 || current_page > total_pages {
        return Err(RangeError::InvalidArgument {
            current: current_page,
            total: total_pages,
        });
    }

    let margin = budget.margin_pages;
    let center = budget.center_pages;

    let slots = if total_pages <= budget.max_full_listing() {
        run(1, total_pages)
    } else {
        let left_margin = run(1, margin);
        let right_margin = run_ending_at(total_pages, margin);

        let in_left_range = current_page <= margin + center;
        let in_right_range = current_page > total_pages - margin - center;

        // Boundary ranges lose one ellipsis, so the center run gains a page.
        let middle: Vec<Slot> = if in_left_range {
            [run(margin + 1, center + 1), vec![Slot::Ellipsis]].concat()
        } else if in_right_range {
            [vec![Slot::Ellipsis], run_ending_at(total_pages - margin, center + 1)].concat()
        } else {
            [
                vec![Slot::Ellipsis],
                run(current_page - center / 2 + 1, center),
                vec![Slot::Ellipsis],
            ]
            .concat()
        };

        [left_margin, middle, right_margin].concat()
    };

    Ok(PageRange {
        slots,
        current: current_page,
        total: total_pages,
    })
}

/// `length` pages starting at `start`. Never computes past the last page.
fn run(start: usize, length: usize) -> Vec<Slot> {
    (0..length).map(|offset| Slot::Page(start + offset)).collect()
}

/// `length` pages ending at `last`, in ascending order.
fn run_ending_at(last: usize, length: usize) -> Vec<Slot> {
    (0..length).rev().map(|offset| Slot::Page(last - offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::slots;

    fn default_range(current: usize, total: usize) -> PageRange {
        compute_range(current, total, DisplayBudget::default()).unwrap()
    }

    #[test]
    fn test_full_listing_when_few_pages() {
        let range = default_range(3, 5);
        assert_eq!(range.slots(), slots("1 2 3 4 5"));
        assert_eq!(range.ellipsis_count(), 0);
    }

    #[test]
    fn test_full_listing_at_exact_limit() {
        // 2*1 + 4 + 2 = 8
        let range = default_range(8, 8);
        assert_eq!(range.slots(), slots("1 2 3 4 5 6 7 8"));
    }

    #[test]
    fn test_left_range() {
        let range = default_range(2, 30);
        assert_eq!(range.slots(), slots("1 2 3 4 5 6 … 30"));
    }

    #[test]
    fn test_left_range_upper_edge() {
        // margin + center = 5 is still left range
        let range = default_range(5, 30);
        assert_eq!(range.slots(), slots("1 2 3 4 5 6 … 30"));
    }

    #[test]
    fn test_right_range() {
        let range = default_range(29, 30);
        assert_eq!(range.slots(), slots("1 … 25 26 27 28 29 30"));
    }

    #[test]
    fn test_right_range_lower_edge() {
        // 30 - 1 - 4 = 25, so 26 is the first right-range page
        let range = default_range(26, 30);
        assert_eq!(range.slots(), slots("1 … 25 26 27 28 29 30"));
    }

    #[test]
    fn test_middle_range_even_center_biased_left() {
        let range = default_range(15, 30);
        assert_eq!(range.slots(), slots("1 … 14 15 16 17 … 30"));
    }

    #[test]
    fn test_middle_range_odd_center() {
        let budget = DisplayBudget::new(1, 5).unwrap();
        let range = compute_range(15, 30, budget).unwrap();
        // offset floor(5/2) = 2, run starts at 14
        assert_eq!(range.slots(), slots("1 … 14 15 16 17 18 … 30"));
    }

    #[test]
    fn test_wider_margins() {
        let budget = DisplayBudget::new(2, 4).unwrap();
        let range = compute_range(50, 100, budget).unwrap();
        assert_eq!(range.slots(), slots("1 2 … 49 50 51 52 … 99 100"));
    }

    #[test]
    fn test_zero_margin() {
        let budget = DisplayBudget::new(0, 4).unwrap();
        let range = compute_range(15, 30, budget).unwrap();
        assert_eq!(range.slots(), slots("… 14 15 16 17 …"));
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let range = default_range(1, 1);
        assert_eq!(range.slots(), slots("1"));
        assert!(!range.has_prev());
        assert!(!range.has_next());
    }

    #[test]
    fn test_prev_next_controls() {
        let first = default_range(1, 30);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = default_range(30, 30);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_is_current() {
        let range = default_range(15, 30);
        assert!(range.is_current(Slot::Page(15)));
        assert!(!range.is_current(Slot::Page(14)));
        assert!(!range.is_current(Slot::Ellipsis));
    }

    #[test]
    fn test_zero_total_is_no_pages() {
        assert_eq!(
            compute_range(1, 0, DisplayBudget::default()),
            Err(RangeError::NoPages)
        );
    }

    #[test]
    fn test_current_out_of_bounds() {
        assert_eq!(
            compute_range(0, 10, DisplayBudget::default()),
            Err(RangeError::InvalidArgument { current: 0, total: 10 })
        );
        assert_eq!(
            compute_range(11, 10, DisplayBudget::default()),
            Err(RangeError::InvalidArgument { current: 11, total: 10 })
        );
    }

    #[test]
    fn test_budget_rejects_small_center() {
        let err = DisplayBudget::new(1, 1).unwrap_err();
        assert!(matches!(err, RangeError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_budget_rejects_overflowing_margin() {
        let err = DisplayBudget::new(usize::MAX / 2 + 1, 4).unwrap_err();
        assert!(matches!(err, RangeError::InvalidConfiguration(_)));
        assert!(DisplayBudget::new(usize::MAX / 2 - 1, 4).is_err());
        assert!(DisplayBudget::new(0, usize::MAX - 1).is_err());
    }

    #[test]
    fn test_largest_budget_computes_without_overflow() {
        // 2m + c + 2 == usize::MAX exactly
        let budget = DisplayBudget::new(usize::MAX / 2 - 2, 3).unwrap();
        assert_eq!(budget.max_full_listing(), usize::MAX);
        let range = compute_range(1, 10, budget).unwrap();
        assert_eq!(range.len(), 10);
    }

    #[test]
    fn test_last_page_at_usize_max() {
        let range = compute_range(usize::MAX, usize::MAX, DisplayBudget::default()).unwrap();
        assert_eq!(range.pages().last(), Some(usize::MAX));
        assert_eq!(range.ellipsis_count(), 1);

        let budget = DisplayBudget::new(0, 4).unwrap();
        let range = compute_range(usize::MAX, usize::MAX, budget).unwrap();
        assert_eq!(range.pages().last(), Some(usize::MAX));
    }

    #[test]
    fn test_max_full_listing() {
        assert_eq!(DisplayBudget::default().max_full_listing(), 8);
        assert_eq!(DisplayBudget::new(2, 3).unwrap().max_full_listing(), 9);
    }

    #[test]
    fn test_to_text_middle() {
        let range = default_range(15, 30);
        assert_eq!(range.to_text("…"), "‹ 1 … 14 [15] 16 17 … 30 ›");
    }

    #[test]
    fn test_to_text_custom_ellipsis_and_edges() {
        assert_eq!(default_range(1, 30).to_text("..."), "[1] 2 3 4 5 6 ... 30 ›");
        assert_eq!(default_range(1, 1).to_text("…"), "[1]");
    }

    #[test]
    fn test_pages_skips_ellipsis() {
        let range = default_range(29, 30);
        let pages: Vec<usize> = range.pages().collect();
        assert_eq!(pages, vec![1, 25, 26, 27, 28, 29, 30]);
    }
}
