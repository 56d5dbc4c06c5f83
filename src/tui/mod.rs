//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the pager,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event arrived.
//! Between events it sleeps in `poll` for up to 500ms.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::Pager;
use crate::tui::component::EventHandler;
use crate::tui::components::PaginationState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core pager logic)
pub struct TuiState {
    pub pagination: PaginationState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            pagination: PaginationState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut pager: Pager) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut pager));
    ratatui::restore();
    info!(
        "Pager closed on page {} of {}",
        pager.current_page, pager.total_pages
    );
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, pager: &mut Pager) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, pager, &mut tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain all pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if dispatch(pager, &mut tui, event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one event through the components and the reducer.
fn dispatch(pager: &mut Pager, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => update(pager, Action::Quit),
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        _ => match tui.pagination.handle_event(&event) {
            Some(pagination_event) => {
                let effect = update(pager, pagination_event.into());
                if let Effect::PageChanged(page) = effect {
                    debug!("Page changed to {}", page);
                }
                effect
            }
            None => Effect::None,
        },
    }
}
