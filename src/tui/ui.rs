use crate::core::state::Pager;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Pagination, TitleBar};

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const HELP_TEXT: &str = " ←/h Prev  →/l Next  Home First  End Last  q Quit ";

pub fn draw_ui(frame: &mut Frame, pager: &Pager, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, bar_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        pager.current_page,
        pager.total_pages,
        pager.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    // Invalid or empty input renders an empty bar
    let range = match pager.range() {
        Ok(range) => Some(range),
        Err(e) => {
            debug!("Not rendering page bar: {}", e);
            None
        }
    };

    draw_page_view(frame, main_area, pager);

    Pagination::new(&mut tui.pagination, range.as_ref(), &pager.ellipsis).render(frame, bar_area);
}

fn draw_page_view(frame: &mut Frame, area: Rect, pager: &Pager) {
    let block = Block::bordered()
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(HELP_TEXT).centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = if pager.is_empty() {
        Line::from(Span::styled(
            "Nothing to paginate",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("Page {}", pager.current_page),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    };

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), middle);
}
