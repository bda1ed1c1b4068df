//! Booking form, slot list and booking result handlers

use tracing::{debug, info};

use vastu_core::{AvailableSlot, ConsultationBooking};

use crate::controller::ViewId;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Begin a slot fetch and return the action that performs it.
pub fn start_fetch(state: &mut AppState) -> UpdateResult {
    let seq = state.slots.begin_fetch();
    UpdateResult::action(UpdateAction::FetchSlots { seq })
}

pub fn handle_move_cursor(state: &mut AppState, delta: isize) -> UpdateResult {
    let len = state.slots.bookable().len();
    state.booking.move_slot_cursor(delta, len);
    UpdateResult::none()
}

pub fn handle_select_slot(state: &mut AppState) -> UpdateResult {
    let bookable = state.slots.bookable();
    state.booking.select_highlighted(&bookable);
    UpdateResult::none()
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.booking.submit() {
        Some(request) => UpdateResult::action(UpdateAction::BookConsultation { request }),
        None => UpdateResult::none(),
    }
}

pub fn handle_book_another(state: &mut AppState) -> UpdateResult {
    state.booking.reset();
    if state.slots.needs_fetch() {
        return start_fetch(state);
    }
    UpdateResult::none()
}

pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if state.slots.is_loading() {
        return UpdateResult::none();
    }
    start_fetch(state)
}

pub fn handle_slots_loaded(
    state: &mut AppState,
    seq: u64,
    slots: Vec<AvailableSlot>,
) -> UpdateResult {
    if !state.slots.loaded(seq, slots) {
        debug!("Ignoring overtaken slot fetch {}", seq);
        return UpdateResult::none();
    }
    let bookable = state.slots.bookable();
    debug!("{} bookable slots", bookable.len());
    state.booking.reconcile_slots(&bookable);
    UpdateResult::none()
}

pub fn handle_slots_failed(state: &mut AppState, seq: u64, error: String) -> UpdateResult {
    if state.slots.failed(seq) {
        debug!("Slot fetch {} failed: {}", seq, error);
    }
    UpdateResult::none()
}

/// Show the confirmation and refresh the slot list, since the booked slot
/// is no longer available.
pub fn handle_confirmed(state: &mut AppState, booking: ConsultationBooking) -> UpdateResult {
    info!(
        "Consultation booked: #{} ({})",
        booking.booking_id, booking.status
    );
    state.booking.confirm(booking);
    state.slots.invalidate();

    if state.active_view() == ViewId::Booking {
        return start_fetch(state);
    }
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, error: String) -> UpdateResult {
    debug!("Booking failed: {}", error);
    state.booking.fail();
    UpdateResult::none()
}
