//! # TitleBar Component
//!
//! Top status bar showing where the pager is.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"pagerange | page 15 of 30 | already on last page"`
//! 2. **Default**: `"pagerange | page 15 of 30"`
//! 3. **Empty pager**: `"pagerange | no pages"`
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    pub current_page: usize,
    pub total_pages: usize,
    /// Transient status (e.g. "already on first page")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(current_page: usize, total_pages: usize, status_message: String) -> Self {
        Self {
            current_page,
            total_pages,
            status_message,
        }
    }

    pub fn title_text(&self) -> String {
        let position = if self.total_pages == 0 {
            "no pages".to_string()
        } else {
            format!("page {} of {}", self.current_page, self.total_pages)
        };
        if self.status_message.is_empty() {
            format!("pagerange | {position}")
        } else {
            format!("pagerange | {position} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}
