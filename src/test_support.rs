//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::range::{DisplayBudget, Slot};
use crate::core::state::Pager;

/// Parse a compact range description like `"1 … 14 15 16 17 … 30"`.
///
/// Any token that isn't a number is read as an ellipsis.
pub fn slots(layout: &str) -> Vec<Slot> {
    layout
        .split_whitespace()
        .map(|token| match token.parse() {
            Ok(page) => Slot::Page(page),
            Err(_) => Slot::Ellipsis,
        })
        .collect()
}

/// Creates a test Pager with the default budget.
pub fn test_pager(current_page: usize, total_pages: usize) -> Pager {
    Pager::new(current_page, total_pages, DisplayBudget::default())
}

/// Collect a TestBackend buffer into one string, row by row.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
