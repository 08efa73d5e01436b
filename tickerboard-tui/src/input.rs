//! Keyboard and mouse mapping to table intent.
//!
//! Nothing here mutates state; the caller dispatches the returned
//! [`Intent`] to whatever owns the markets and filter.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use tickerboard_core::{Intent, TickerTableView};

use crate::ticker_table::{Hit, TickerTableLayout};

pub fn key_intent(view: &TickerTableView, selected: Option<usize>, key: KeyEvent) -> Option<Intent> {
    // Windows sends both Press and Release.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => step_tab(view, -1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => step_tab(view, 1),
        KeyCode::Enter | KeyCode::Char('t') => {
            let row = view.rows().get(selected?)?;
            Some(Intent::RedirectToTrading(row.market_id.clone()))
        }
        KeyCode::Up | KeyCode::Char('k') => step_row(view, selected, -1),
        KeyCode::Down | KeyCode::Char('j') => step_row(view, selected, 1),
        KeyCode::Home | KeyCode::Char('g') => (!view.rows().is_empty()).then_some(Intent::Select(0)),
        KeyCode::End | KeyCode::Char('G') => {
            view.rows().len().checked_sub(1).map(Intent::Select)
        }
        _ => None,
    }
}

pub fn mouse_intent(
    layout: &TickerTableLayout,
    view: &TickerTableView,
    selected: Option<usize>,
    mouse: MouseEvent,
) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match layout.hit(mouse.column, mouse.row)? {
            Hit::Tab(i) => view
                .tabs
                .get(i)
                .map(|tab| Intent::SetCurrentBidUnit(tab.key.clone())),
            Hit::Trade(i) => view
                .rows()
                .get(i)
                .map(|row| Intent::RedirectToTrading(row.market_id.clone())),
            Hit::Row(i) => Some(Intent::Select(i)),
        },
        MouseEventKind::ScrollDown => step_row(view, selected, 1),
        MouseEventKind::ScrollUp => step_row(view, selected, -1),
        _ => None,
    }
}

/// Neighbouring filter key, wrapping. No active tab starts from the ends.
fn step_tab(view: &TickerTableView, delta: isize) -> Option<Intent> {
    let count = view.tabs.len();
    if count == 0 {
        return None;
    }
    let next = match (view.active_tab(), delta >= 0) {
        (Some(i), true) => (i + 1) % count,
        (Some(i), false) => (i + count - 1) % count,
        (None, true) => 0,
        (None, false) => count - 1,
    };
    Some(Intent::SetCurrentBidUnit(view.tabs[next].key.clone()))
}

fn step_row(view: &TickerTableView, selected: Option<usize>, delta: isize) -> Option<Intent> {
    let last = view.rows().len().checked_sub(1)?;
    let next = match selected {
        Some(current) => current.min(last).saturating_add_signed(delta).min(last),
        None => 0,
    };
    Some(Intent::Select(next))
}
