//! Consultation service operations
//!
//! The [`ConsultationBackend`] trait is the seam between the application and
//! the remote service. The TUI and the headless commands only ever talk to the
//! service through it, so tests can swap in an in-memory implementation.

use vastu_core::prelude::*;
use vastu_core::{AvailableSlot, ConsultationBooking, NumerologyReport, VastuRemedy};

/// Remote operations offered by the consultation service.
///
/// Each call is one request and one response with no retry. Failures surface
/// as remote-call errors (see [`Error::is_remote_call_error`]).
#[trait_variant::make(ConsultationBackend: Send)]
pub trait LocalConsultationBackend {
    /// Generate a numerology report. `birth_date` must be `DD/MM/YYYY`.
    async fn generate_report(&self, name: &str, birth_date: &str) -> Result<NumerologyReport>;

    /// Generate Vastu remedies for a report's life path number.
    async fn generate_remedy(&self, name: &str, life_path_number: u32) -> Result<VastuRemedy>;

    /// Book the slot identified by its time range label.
    async fn book_consultation(
        &self,
        name: &str,
        phone: &str,
        time_range: &str,
    ) -> Result<ConsultationBooking>;

    /// Every slot the service knows about, booked or not.
    async fn list_available_slots(&self) -> Result<Vec<AvailableSlot>>;

    /// Publish a new bookable slot.
    async fn add_available_slot(&self, time_range: &str) -> Result<AvailableSlot>;

    async fn list_bookings(&self) -> Result<Vec<ConsultationBooking>>;

    async fn list_reports(&self) -> Result<Vec<NumerologyReport>>;

    async fn list_remedies(&self) -> Result<Vec<VastuRemedy>>;
}
