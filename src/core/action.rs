//! # Actions
//!
//! Everything that can happen to a pager becomes an `Action`.
//! User clicks `›`? That's `Action::NextPage`.
//! User clicks page 7? That's `Action::GoToPage(7)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the outer layer.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{Pager, clamp_page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    GoToPage(usize),
    SetTotalPages(usize),
    Quit,
}

/// What the caller should react to after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    PageChanged(usize),
    /// The total changed but the current page stayed put.
    TotalChanged(usize),
    Quit,
}

pub fn update(pager: &mut Pager, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    let target = match action {
        Action::Quit => return Effect::Quit,
        Action::PrevPage => pager.current_page.saturating_sub(1),
        Action::NextPage => pager.current_page.saturating_add(1),
        Action::FirstPage => 1,
        Action::LastPage => pager.total_pages,
        Action::GoToPage(page) => page,
        Action::SetTotalPages(total) => {
            let resized = pager.total_pages != total;
            pager.total_pages = total;
            let next = clamp_page(pager.current_page, total);
            if next == pager.current_page {
                return if resized {
                    Effect::TotalChanged(total)
                } else {
                    Effect::None
                };
            }
            next
        }
    };

    let next = clamp_page(target, pager.total_pages);
    if next == pager.current_page {
        pager.status_message = edge_status(pager, action);
        return Effect::None;
    }

    pager.current_page = next;
    pager.status_message.clear();
    Effect::PageChanged(next)
}

fn edge_status(pager: &Pager, action: Action) -> String {
    match action {
        _ if pager.is_empty() => "nothing to paginate".to_string(),
        Action::PrevPage if pager.current_page == 1 => "already on first page".to_string(),
        Action::NextPage if pager.current_page == pager.total_pages => {
            "already on last page".to_string()
        }
        _ => String::new(),
    }
}
