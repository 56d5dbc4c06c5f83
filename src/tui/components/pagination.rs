//! # Pagination Component
//!
//! One-line page bar: `‹  1  …  14 [15] 16  17  …  30  ›`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PaginationState` lives in `TuiState` and keeps the clickable regions
//!   computed during the last render
//! - `Pagination` is created each frame with borrowed state and the range
//!
//! ## Compact Mode
//!
//! When the full bar is wider than the area, only the previous control, the
//! current page and the next control are drawn. Page numbers and ellipses
//! come back as soon as there is room.
//!
//! ## Empty Pager
//!
//! A pager with nothing to paginate (no range) draws nothing and has no
//! clickable regions.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::range::{PageRange, Slot};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PREV_LABEL: &str = "‹";
const NEXT_LABEL: &str = "›";
const SEPARATOR: &str = " ";

/// Events emitted by the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    Prev,
    Next,
    First,
    Last,
    Page(usize),
}

impl From<PaginationEvent> for Action {
    fn from(event: PaginationEvent) -> Self {
        match event {
            PaginationEvent::Prev => Action::PrevPage,
            PaginationEvent::Next => Action::NextPage,
            PaginationEvent::First => Action::FirstPage,
            PaginationEvent::Last => Action::LastPage,
            PaginationEvent::Page(page) => Action::GoToPage(page),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Prev,
    Next,
    Page { page: usize, is_current: bool },
    Ellipsis,
}

/// One drawn piece of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    fn width(&self) -> usize {
        self.text.width()
    }

    /// Width in terminal columns, saturated to what a `Rect` can hold.
    fn columns(&self) -> u16 {
        u16::try_from(self.width()).unwrap_or(u16::MAX)
    }

    fn style(&self) -> Style {
        match self.kind {
            SegmentKind::Page {
                is_current: true, ..
            } => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            SegmentKind::Ellipsis => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::Cyan),
        }
    }
}

/// Columns `[start, end)` on `row` covered by a segment after the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub row: u16,
    pub start: u16,
    pub end: u16,
    pub kind: SegmentKind,
}

/// Build the segments for a range. `compact` keeps only the current page and controls.
pub fn layout_segments(range: &PageRange, ellipsis: &str, compact: bool) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(range.len() + 2);
    if range.has_prev() {
        segments.push(Segment {
            kind: SegmentKind::Prev,
            text: PREV_LABEL.to_string(),
        });
    }
    for &slot in range.slots() {
        let is_current = range.is_current(slot);
        match slot {
            Slot::Page(page) if is_current || !compact => segments.push(Segment {
                kind: SegmentKind::Page { page, is_current },
                text: format!(" {page} "),
            }),
            Slot::Ellipsis if !compact => segments.push(Segment {
                kind: SegmentKind::Ellipsis,
                text: ellipsis.to_string(),
            }),
            _ => {}
        }
    }
    if range.has_next() {
        segments.push(Segment {
            kind: SegmentKind::Next,
            text: NEXT_LABEL.to_string(),
        });
    }
    segments
}

/// Total drawn width of `segments`, separators included. Saturates instead of overflowing.
pub fn segments_width(segments: &[Segment]) -> usize {
    let gaps = segments.len().saturating_sub(1);
    segments
        .iter()
        .map(Segment::width)
        .fold(gaps.saturating_mul(SEPARATOR.width()), usize::saturating_add)
}

/// Persistent state for the pagination bar.
#[derive(Debug, Default)]
pub struct PaginationState {
    pub hit_regions: Vec<HitRegion>,
    pub compact: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a terminal cell to the event its segment would trigger.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<PaginationEvent> {
        let region = self
            .hit_regions
            .iter()
            .find(|r| r.row == row && (r.start..r.end).contains(&column))?;
        match region.kind {
            SegmentKind::Prev => Some(PaginationEvent::Prev),
            SegmentKind::Next => Some(PaginationEvent::Next),
            SegmentKind::Page { page, .. } => Some(PaginationEvent::Page(page)),
            SegmentKind::Ellipsis => None,
        }
    }
}

impl EventHandler for PaginationState {
    type Event = PaginationEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PaginationEvent> {
        match event {
            TuiEvent::Left => Some(PaginationEvent::Prev),
            TuiEvent::Right => Some(PaginationEvent::Next),
            TuiEvent::Home => Some(PaginationEvent::First),
            TuiEvent::End => Some(PaginationEvent::Last),
            TuiEvent::MouseClick(column, row) => self.hit_test(*column, *row),
            _ => None,
        }
    }
}

/// Transient render wrapper for the pagination bar.
pub struct Pagination<'a> {
    state: &'a mut PaginationState,
    range: Option<&'a PageRange>,
    ellipsis: &'a str,
}

impl<'a> Pagination<'a> {
    pub fn new(
        state: &'a mut PaginationState,
        range: Option<&'a PageRange>,
        ellipsis: &'a str,
    ) -> Self {
        Self {
            state,
            range,
            ellipsis,
        }
    }
}

impl Component for Pagination<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hit_regions.clear();
        self.state.compact = false;

        let Some(range) = self.range else {
            return;
        };
        if area.height == 0 {
            return;
        }

        let mut segments = layout_segments(range, self.ellipsis, false);
        if segments_width(&segments) > area.width as usize {
            segments = layout_segments(range, self.ellipsis, true);
            self.state.compact = true;
        }

        let width = u16::try_from(segments_width(&segments))
            .unwrap_or(u16::MAX)
            .min(area.width);
        let left = area.x + (area.width - width) / 2;
        let mut column = left;
        let row = area.y;

        let mut spans = Vec::with_capacity(segments.len() * 2);
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(SEPARATOR));
                column = column.saturating_add(SEPARATOR.width() as u16);
            }
            let start = column;
            column = column.saturating_add(segment.columns());
            self.state.hit_regions.push(HitRegion {
                row,
                start,
                end: column,
                kind: segment.kind,
            });
            spans.push(Span::styled(segment.text.clone(), segment.style()));
        }

        let bar_area = Rect {
            x: left,
            y: row,
            width,
            height: 1,
        };
        frame.render_widget(Line::from(spans), bar_area);
    }
}
