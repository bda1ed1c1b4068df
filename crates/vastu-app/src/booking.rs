//! Consultation booking form and slot cache

use vastu_core::{validate_booking, AvailableSlot, ConsultationBooking, FieldErrors, FormField};

/// Focusable elements of the booking form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingField {
    #[default]
    Name,
    Phone,
    Slots,
    Submit,
}

impl BookingField {
    pub fn next(self) -> Self {
        match self {
            BookingField::Name => BookingField::Phone,
            BookingField::Phone => BookingField::Slots,
            BookingField::Slots => BookingField::Submit,
            BookingField::Submit => BookingField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BookingField::Name => BookingField::Submit,
            BookingField::Phone => BookingField::Name,
            BookingField::Slots => BookingField::Phone,
            BookingField::Submit => BookingField::Slots,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, BookingField::Name | BookingField::Phone)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum BookingStatus {
    #[default]
    Editing,
    Submitting,
    Confirmed(ConsultationBooking),
}

/// A validated booking submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub time_range: String,
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    /// Time range of the chosen slot.
    pub selected_slot: Option<String>,
    /// Highlighted row in the slot picker.
    pub slot_cursor: usize,
    pub focus: BookingField,
    pub errors: FieldErrors,
    pub status: BookingStatus,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, BookingStatus::Submitting)
    }

    pub fn confirmation(&self) -> Option<&ConsultationBooking> {
        match &self.status {
            BookingStatus::Confirmed(booking) => Some(booking),
            _ => None,
        }
    }

    fn editable(&self) -> bool {
        matches!(self.status, BookingStatus::Editing)
    }

    pub fn input_char(&mut self, c: char) {
        if !self.editable() {
            return;
        }
        match self.focus {
            BookingField::Name => {
                self.name.push(c);
                self.errors.clear(FormField::Name);
            }
            BookingField::Phone => {
                self.phone.push(c);
                self.errors.clear(FormField::Phone);
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        if !self.editable() {
            return;
        }
        match self.focus {
            BookingField::Name => {
                self.name.pop();
                self.errors.clear(FormField::Name);
            }
            BookingField::Phone => {
                self.phone.pop();
                self.errors.clear(FormField::Phone);
            }
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move the slot picker highlight, clamped to `len` rows.
    pub fn move_slot_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.slot_cursor = 0;
            return;
        }
        let max = len as isize - 1;
        self.slot_cursor = (self.slot_cursor as isize + delta).clamp(0, max) as usize;
    }

    /// Choose the highlighted slot.
    pub fn select_highlighted(&mut self, slots: &[AvailableSlot]) {
        if !self.editable() {
            return;
        }
        if let Some(slot) = slots.get(self.slot_cursor) {
            self.selected_slot = Some(slot.time_range.clone());
            self.errors.clear(FormField::Slot);
        }
    }

    /// Drop a selection that is no longer offered and keep the cursor in range.
    pub fn reconcile_slots(&mut self, slots: &[AvailableSlot]) {
        if let Some(selected) = &self.selected_slot {
            if !slots.iter().any(|s| &s.time_range == selected) {
                self.selected_slot = None;
            }
        }
        self.move_slot_cursor(0, slots.len());
    }

    /// Validate and, when clean, mark the form as submitting.
    pub fn submit(&mut self) -> Option<BookingRequest> {
        if !self.editable() {
            return None;
        }
        let errors = validate_booking(&self.name, &self.phone, self.selected_slot.as_deref());
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::new();
        let time_range = self.selected_slot.clone()?;
        self.status = BookingStatus::Submitting;
        Some(BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            time_range,
        })
    }

    /// Booking accepted: clear inputs and show the confirmation.
    pub fn confirm(&mut self, booking: ConsultationBooking) {
        self.name.clear();
        self.phone.clear();
        self.selected_slot = None;
        self.slot_cursor = 0;
        self.focus = BookingField::Name;
        self.errors = FieldErrors::new();
        self.status = BookingStatus::Confirmed(booking);
    }

    /// Booking failed: inputs stay for another attempt.
    pub fn fail(&mut self) {
        self.status = BookingStatus::Editing;
    }

    /// Leave the confirmation and start a fresh booking.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Slot list load state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SlotsState {
    /// Never fetched, or invalidated by a booking.
    #[default]
    Stale,
    Loading,
    Loaded(Vec<AvailableSlot>),
    Failed,
}

/// Cached result of the available-slots query.
///
/// Each fetch is tagged with a sequence number so a response that was
/// overtaken by a newer fetch is ignored.
#[derive(Debug, Clone, Default)]
pub struct SlotCache {
    state: SlotsState,
    fetch_seq: u64,
}

impl SlotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlotsState {
        &self.state
    }

    pub fn needs_fetch(&self) -> bool {
        matches!(self.state, SlotsState::Stale | SlotsState::Failed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SlotsState::Loading)
    }

    /// Start a fetch and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.state = SlotsState::Loading;
        self.fetch_seq
    }

    /// Store a fetch result. Returns `false` when `seq` is outdated.
    pub fn loaded(&mut self, seq: u64, slots: Vec<AvailableSlot>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.state = SlotsState::Loaded(slots);
        true
    }

    pub fn failed(&mut self, seq: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.state = SlotsState::Failed;
        true
    }

    /// Mark cached slots out of date.
    pub fn invalidate(&mut self) {
        self.state = SlotsState::Stale;
    }

    /// Slots that can still be booked. Empty unless loaded.
    pub fn bookable(&self) -> Vec<AvailableSlot> {
        match &self.state {
            SlotsState::Loaded(slots) => vastu_core::bookable_slots(slots),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vastu_backend::test_utils::sample_slot;
    use vastu_core::ValidationError;

    fn slots() -> Vec<AvailableSlot> {
        vec![
            sample_slot(1, "10:00 - 11:00", true),
            sample_slot(2, "11:00 - 12:00", false),
            sample_slot(3, "14:00 - 15:00", true),
        ]
    }

    fn booking() -> ConsultationBooking {
        ConsultationBooking {
            owner_name: "Asha".to_string(),
            booking_id: 42,
            status: "Confirmed".to_string(),
            contact_number: "+91 98765 43210".to_string(),
            selected_time_slot: "10:00 - 11:00".to_string(),
        }
    }

    #[test]
    fn test_empty_submit_collects_all_errors() {
        let mut form = BookingForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.errors.len(), 3);
        assert_eq!(form.status, BookingStatus::Editing);
    }

    #[test]
    fn test_invalid_phone_reported() {
        let mut form = BookingForm::new();
        form.name = "Asha".to_string();
        form.phone = "call me".to_string();
        form.selected_slot = Some("10:00 - 11:00".to_string());

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get(FormField::Phone),
            Some(&ValidationError::InvalidFormat(FormField::Phone))
        );
    }

    #[test]
    fn test_submit_sends_typed_values_untrimmed() {
        let mut form = BookingForm::new();
        form.name = " Asha ".to_string();
        form.phone = "+91 98765 43210 ".to_string();
        form.selected_slot = Some("10:00 - 11:00".to_string());

        let request = form.submit().unwrap();
        assert_eq!(request.name, " Asha ");
        assert_eq!(request.phone, "+91 98765 43210 ");
    }

    #[test]
    fn test_valid_submit_marks_submitting() {
        let mut form = BookingForm::new();
        form.name = "Asha".to_string();
        form.phone = "+91 98765 43210".to_string();
        form.selected_slot = Some("10:00 - 11:00".to_string());

        let request = form.submit().unwrap();
        assert_eq!(request.time_range, "10:00 - 11:00");
        assert!(form.is_submitting());

        // No double submission while in flight
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_select_highlighted_slot() {
        let mut form = BookingForm::new();
        let bookable = vastu_core::bookable_slots(&slots());
        form.move_slot_cursor(1, bookable.len());
        form.select_highlighted(&bookable);
        assert_eq!(form.selected_slot.as_deref(), Some("14:00 - 15:00"));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut form = BookingForm::new();
        form.move_slot_cursor(-1, 2);
        assert_eq!(form.slot_cursor, 0);
        form.move_slot_cursor(5, 2);
        assert_eq!(form.slot_cursor, 1);
        form.move_slot_cursor(1, 0);
        assert_eq!(form.slot_cursor, 0);
    }

    #[test]
    fn test_confirm_clears_inputs() {
        let mut form = BookingForm::new();
        form.name = "Asha".to_string();
        form.phone = "123".to_string();
        form.selected_slot = Some("10:00 - 11:00".to_string());
        form.status = BookingStatus::Submitting;

        form.confirm(booking());

        assert!(form.name.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.selected_slot.is_none());
        assert_eq!(form.confirmation().map(|b| b.booking_id), Some(42));

        form.reset();
        assert_eq!(form.status, BookingStatus::Editing);
    }

    #[test]
    fn test_fail_keeps_inputs() {
        let mut form = BookingForm::new();
        form.name = "Asha".to_string();
        form.status = BookingStatus::Submitting;
        form.fail();
        assert_eq!(form.name, "Asha");
        assert_eq!(form.status, BookingStatus::Editing);
    }

    #[test]
    fn test_reconcile_drops_vanished_selection() {
        let mut form = BookingForm::new();
        form.selected_slot = Some("11:00 - 12:00".to_string());
        form.slot_cursor = 4;

        form.reconcile_slots(&vastu_core::bookable_slots(&slots()));
        assert!(form.selected_slot.is_none());
        assert_eq!(form.slot_cursor, 1);
    }

    #[test]
    fn test_slot_cache_lifecycle() {
        let mut cache = SlotCache::new();
        assert!(cache.needs_fetch());

        let seq = cache.begin_fetch();
        assert!(cache.is_loading());
        assert!(!cache.needs_fetch());

        assert!(cache.loaded(seq, slots()));
        assert_eq!(cache.bookable().len(), 2);

        cache.invalidate();
        assert!(cache.needs_fetch());
        assert!(cache.bookable().is_empty());
    }

    #[test]
    fn test_slot_cache_ignores_overtaken_fetch() {
        let mut cache = SlotCache::new();
        let first = cache.begin_fetch();
        let second = cache.begin_fetch();

        assert!(!cache.loaded(first, slots()));
        assert!(cache.is_loading());
        assert!(cache.failed(second));
        assert!(cache.needs_fetch());
    }
}
