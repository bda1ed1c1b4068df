//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppPhase;
use crate::state::AppState;

use super::{booking, intake, keys::handle_key, navigation, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
            state.tick_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowView(target) => navigation::handle_show_view(state, target),
        Message::NextTab => navigation::handle_cycle_tab(state, 1),
        Message::PrevTab => navigation::handle_cycle_tab(state, -1),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll(state, -1),
        Message::ScrollDown => scroll::handle_scroll(state, 1),
        Message::PageUp => scroll::handle_scroll(state, -scroll::PAGE_LINES),
        Message::PageDown => scroll::handle_scroll(state, scroll::PAGE_LINES),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),

        // ─────────────────────────────────────────────────────────
        // Intake
        // ─────────────────────────────────────────────────────────
        Message::IntakeInput(c) => {
            state.intake.input_char(c);
            UpdateResult::none()
        }
        Message::IntakeBackspace => {
            state.intake.backspace();
            UpdateResult::none()
        }
        Message::IntakeFocusNext => {
            state.intake.focus_next();
            UpdateResult::none()
        }
        Message::IntakeFocusPrev => {
            state.intake.focus_prev();
            UpdateResult::none()
        }
        Message::SubmitIntake => intake::handle_submit(state),
        Message::Pipeline { generation, event } => {
            intake::handle_pipeline_event(state, generation, event)
        }

        // ─────────────────────────────────────────────────────────
        // Booking
        // ─────────────────────────────────────────────────────────
        Message::BookingInput(c) => {
            state.booking.input_char(c);
            UpdateResult::none()
        }
        Message::BookingBackspace => {
            state.booking.backspace();
            UpdateResult::none()
        }
        Message::BookingFocusNext => {
            state.booking.focus_next();
            UpdateResult::none()
        }
        Message::BookingFocusPrev => {
            state.booking.focus_prev();
            UpdateResult::none()
        }
        Message::SlotCursorNext => booking::handle_move_cursor(state, 1),
        Message::SlotCursorPrev => booking::handle_move_cursor(state, -1),
        Message::SelectSlot => booking::handle_select_slot(state),
        Message::SubmitBooking => booking::handle_submit(state),
        Message::BookAnother => booking::handle_book_another(state),
        Message::RefreshSlots => booking::handle_refresh(state),
        Message::SlotsLoaded { seq, slots } => booking::handle_slots_loaded(state, seq, slots),
        Message::SlotsFailed { seq, error } => booking::handle_slots_failed(state, seq, error),
        Message::BookingConfirmed { booking } => booking::handle_confirmed(state, booking),
        Message::BookingFailed { error } => booking::handle_failed(state, error),
    }
}
