//! Key event handlers for each view

use crate::booking::{BookingField, BookingStatus};
use crate::controller::ViewId;
use crate::input_key::InputKey;
use crate::intake::IntakeField;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.confirm_quit_visible {
        return handle_key_confirm_dialog(key);
    }

    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(n @ 1..=5) => return ViewId::from_index(n as usize - 1).map(Message::ShowView),
        _ => {}
    }

    match state.active_view() {
        ViewId::Landing => handle_key_landing(state, key),
        ViewId::Intake => handle_key_intake(state, key),
        ViewId::Report => handle_key_report(state, key),
        ViewId::Remedy => handle_key_remedy(state, key),
        ViewId::Booking => handle_key_booking(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys shared by every view when no text field has focus
fn handle_key_navigation(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(index) = key.digit_index() {
        return state
            .controller
            .visible_tabs()
            .get(index)
            .copied()
            .map(Message::ShowView);
    }

    match key {
        InputKey::Left => Some(Message::PrevTab),
        InputKey::Right => Some(Message::NextTab),
        InputKey::Char('b') => Some(Message::ShowView(ViewId::Booking)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

fn handle_key_landing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ShowView(ViewId::Intake)),
        _ => handle_key_navigation(state, key),
    }
}

/// Scroll keys shared by the report and remedy readers
fn handle_key_reader(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        _ => None,
    }
}

fn handle_key_report(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_reader(&key) {
        return Some(msg);
    }
    match key {
        InputKey::Char('v') => Some(Message::ShowView(ViewId::Remedy)),
        _ => handle_key_navigation(state, key),
    }
}

fn handle_key_remedy(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_reader(&key) {
        return Some(msg);
    }
    match key {
        InputKey::Char('r') => Some(Message::ShowView(ViewId::Report)),
        _ => handle_key_navigation(state, key),
    }
}

fn handle_key_intake(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.intake.focus;

    match key {
        InputKey::Tab | InputKey::Down => return Some(Message::IntakeFocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::IntakeFocusPrev),
        InputKey::Esc => return Some(Message::ShowView(ViewId::Landing)),
        InputKey::Enter => {
            return Some(match focus {
                IntakeField::Name => Message::IntakeFocusNext,
                IntakeField::BirthDate | IntakeField::Submit => Message::SubmitIntake,
            })
        }
        _ => {}
    }

    if focus.is_text() {
        match key {
            InputKey::Char(c) => Some(Message::IntakeInput(c)),
            InputKey::Backspace => Some(Message::IntakeBackspace),
            _ => None,
        }
    } else {
        handle_key_navigation(state, key)
    }
}

fn handle_key_booking(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('r') {
        return Some(Message::RefreshSlots);
    }

    if let BookingStatus::Confirmed(_) = state.booking.status {
        return match key {
            InputKey::Enter => Some(Message::BookAnother),
            InputKey::Esc => Some(Message::ShowView(ViewId::Landing)),
            _ => handle_key_navigation(state, key),
        };
    }

    let focus = state.booking.focus;

    match key {
        InputKey::Tab => return Some(Message::BookingFocusNext),
        InputKey::BackTab => return Some(Message::BookingFocusPrev),
        InputKey::Esc => return Some(Message::ShowView(ViewId::Landing)),
        _ => {}
    }

    match focus {
        BookingField::Name | BookingField::Phone => match key {
            InputKey::Char(c) => Some(Message::BookingInput(c)),
            InputKey::Backspace => Some(Message::BookingBackspace),
            InputKey::Down | InputKey::Enter => Some(Message::BookingFocusNext),
            InputKey::Up => Some(Message::BookingFocusPrev),
            _ => None,
        },
        BookingField::Slots => match key {
            InputKey::Up | InputKey::Left => Some(Message::SlotCursorPrev),
            InputKey::Down | InputKey::Right => Some(Message::SlotCursorNext),
            InputKey::Char(' ') | InputKey::Enter => Some(Message::SelectSlot),
            _ => handle_key_navigation(state, key),
        },
        BookingField::Submit => match key {
            InputKey::Enter => Some(Message::SubmitBooking),
            InputKey::Down => Some(Message::BookingFocusNext),
            InputKey::Up => Some(Message::BookingFocusPrev),
            _ => handle_key_navigation(state, key),
        },
    }
}
