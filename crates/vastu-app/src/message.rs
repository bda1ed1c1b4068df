//! Message types for the application (TEA pattern)

use vastu_core::{AvailableSlot, ConsultationBooking};

use crate::controller::ViewId;
use crate::input_key::InputKey;
use crate::pipeline::PipelineEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner, notice expiry)
    Tick,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Activate a view by id
    ShowView(ViewId),
    /// Move to the next visible header tab
    NextTab,
    /// Move to the previous visible header tab
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Reader scrolling (report and remedy views)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // Intake form
    // ─────────────────────────────────────────────────────────
    IntakeInput(char),
    IntakeBackspace,
    IntakeFocusNext,
    IntakeFocusPrev,
    SubmitIntake,

    /// Progress of the intake pipeline started by submission `generation`
    Pipeline {
        generation: u64,
        event: PipelineEvent,
    },

    // ─────────────────────────────────────────────────────────
    // Booking form
    // ─────────────────────────────────────────────────────────
    BookingInput(char),
    BookingBackspace,
    BookingFocusNext,
    BookingFocusPrev,
    SlotCursorNext,
    SlotCursorPrev,
    /// Choose the highlighted slot
    SelectSlot,
    SubmitBooking,
    /// Leave the confirmation screen for a fresh form
    BookAnother,
    /// Re-fetch the slot list
    RefreshSlots,

    SlotsLoaded {
        seq: u64,
        slots: Vec<AvailableSlot>,
    },
    SlotsFailed {
        seq: u64,
        error: String,
    },
    BookingConfirmed {
        booking: ConsultationBooking,
    },
    BookingFailed {
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────
    /// Quit, asking first when remote calls are in flight
    RequestQuit,
    ConfirmQuit,
    CancelQuit,
    /// Quit immediately
    Quit,
}
