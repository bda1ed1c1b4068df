//! Domain types exchanged with the consultation service
//!
//! Field names on the wire follow the service's camelCase interface; the
//! owner of a record is sent as `userName`.

use serde::{Deserialize, Serialize};

/// Personalised numerology report produced by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    #[serde(rename = "userName")]
    pub owner_name: String,
    /// Display-formatted birth date as echoed by the service.
    pub birth_date: String,
    pub favorable_colors: Vec<String>,
    pub relationship_guidance: String,
    pub life_path_number: u32,
    pub career_recommendations: Vec<String>,
    pub lucky_numbers: Vec<u32>,
    pub birth_chart_analysis: String,
}

/// Vastu guidance derived from a report's life path number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VastuRemedy {
    #[serde(rename = "userName")]
    pub owner_name: String,
    pub numerology_number: u32,
    pub preferred_directions: Vec<String>,
    pub vastu_suggestions: Vec<String>,
    pub remedy_instructions: String,
}

/// A bookable consultation time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    #[serde(rename = "slotId")]
    pub id: u64,
    pub time_range: String,
    pub is_available: bool,
    /// Service-side creation time; not every deployment sends it.
    #[serde(default)]
    pub timestamp: i64,
}

/// Confirmation returned after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationBooking {
    #[serde(rename = "userName")]
    pub owner_name: String,
    pub booking_id: u64,
    #[serde(rename = "bookingStatus")]
    pub status: String,
    pub contact_number: String,
    pub selected_time_slot: String,
}

/// Keep only the slots that can still be booked, preserving service order.
pub fn bookable_slots(slots: &[AvailableSlot]) -> Vec<AvailableSlot> {
    slots.iter().filter(|s| s.is_available).cloned().collect()
}
