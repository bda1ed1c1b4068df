//! View switching and header tab cycling

use tracing::debug;

use crate::controller::ViewId;
use crate::message::Message;
use crate::state::{AppState, Notice};

use super::{booking, UpdateResult};

/// Activate `target`, or show the fallback notice when it has no data.
pub fn handle_show_view(state: &mut AppState, target: ViewId) -> UpdateResult {
    if let Err(e) = state.controller.activate_view(target) {
        debug!("Navigation to {:?} refused: {}", target, e);
        state.show_notice(Notice::warning(e.message()));
        return UpdateResult::none();
    }

    if target == ViewId::Booking && state.slots.needs_fetch() {
        return booking::start_fetch(state);
    }

    UpdateResult::none()
}

/// Move `step` tabs along the visible header tabs, wrapping around.
pub fn handle_cycle_tab(state: &mut AppState, step: isize) -> UpdateResult {
    let tabs = state.controller.visible_tabs();
    if tabs.is_empty() {
        return UpdateResult::none();
    }

    let current = tabs
        .iter()
        .position(|id| *id == state.active_view())
        .unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(tabs.len() as isize) as usize;

    UpdateResult::message(Message::ShowView(tabs[next]))
}
