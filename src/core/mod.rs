//! # Core Pager Logic
//!
//! This module contains the pager's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • compute_range()      │
//!                    │  • Pager (state)        │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  --print   │
//!           │  Adapter   │              │ (one line) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`range`]: The page-range calculator and its `Slot`/`PageRange` types
//! - [`state`]: The `Pager` struct
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Config file loading and override resolution

pub mod action;
pub mod config;
pub mod range;
pub mod state;

pub use range::{DisplayBudget, PageRange, RangeError, Slot, compute_range};
