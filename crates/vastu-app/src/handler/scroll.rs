//! Reader scroll handlers for the report and remedy views

use crate::controller::ViewId;
use crate::state::AppState;

use super::UpdateResult;

/// Lines moved by PgUp/PgDn
pub const PAGE_LINES: i32 = 10;

fn offset_mut(state: &mut AppState) -> Option<&mut u16> {
    match state.active_view() {
        ViewId::Report => Some(&mut state.scroll.report),
        ViewId::Remedy => Some(&mut state.scroll.remedy),
        _ => None,
    }
}

/// Scroll by `delta` lines. The renderer clamps the bottom edge.
pub fn handle_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    if let Some(offset) = offset_mut(state) {
        *offset = (*offset as i32 + delta).clamp(0, u16::MAX as i32) as u16;
    }
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    if let Some(offset) = offset_mut(state) {
        *offset = 0;
    }
    UpdateResult::none()
}
