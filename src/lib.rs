//! pagerange library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{DisplayBudget, PageRange, RangeError, Slot, compute_range};
