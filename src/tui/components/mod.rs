//! # TUI Components
//!
//! UI components for the terminal pager.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing page position and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Pagination`: The page bar. `PaginationState` persists across frames
//!   and remembers where each page box was drawn, so clicks can be mapped
//!   back to pages.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Pagination::new(&mut tui.pagination, range.as_ref(), &pager.ellipsis).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! pagination.render(frame, area); // reads from global Pager
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! └── pagination.rs    (Page bar with prev/next controls)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod pagination;
pub use pagination::{Pagination, PaginationEvent, PaginationState};
