//! Test utilities for backend consumers
//!
//! Provides sample records and [`FakeBackend`], an in-memory
//! [`ConsultationBackend`] that records every call it receives.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use vastu_core::prelude::*;
use vastu_core::{AvailableSlot, ConsultationBooking, NumerologyReport, VastuRemedy};

use crate::protocol::methods;
use crate::service::ConsultationBackend;

/// Creates a report for `name` with the given life path number.
pub fn sample_report(name: &str, life_path_number: u32) -> NumerologyReport {
    NumerologyReport {
        owner_name: name.to_string(),
        birth_date: "12/05/1990".to_string(),
        favorable_colors: vec!["Yellow".to_string(), "Saffron".to_string()],
        relationship_guidance: "Lead with warmth and listen before advising.".to_string(),
        life_path_number,
        career_recommendations: vec!["Teacher".to_string(), "Counsellor".to_string()],
        lucky_numbers: vec![3, life_path_number],
        birth_chart_analysis: "A compassionate chart with a strong sense of service.".to_string(),
    }
}

/// Creates a remedy matching [`sample_report`].
pub fn sample_remedy(name: &str, numerology_number: u32) -> VastuRemedy {
    VastuRemedy {
        owner_name: name.to_string(),
        numerology_number,
        preferred_directions: vec!["North-East".to_string(), "East".to_string()],
        vastu_suggestions: vec![
            "Keep the north-east corner clutter free.".to_string(),
            "Place a brass bowl of water near the entrance.".to_string(),
        ],
        remedy_instructions: "Light a diya in the north-east every evening.".to_string(),
    }
}

pub fn sample_slot(id: u64, time_range: &str, is_available: bool) -> AvailableSlot {
    AvailableSlot {
        id,
        time_range: time_range.to_string(),
        is_available,
        timestamp: 1_700_000_000_000_000_000,
    }
}

/// One recorded call against [`FakeBackend`], named by its service method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub args: Vec<String>,
}

#[derive(Debug, Default)]
struct FakeState {
    slots: Vec<AvailableSlot>,
    bookings: Vec<ConsultationBooking>,
    reports: Vec<NumerologyReport>,
    remedies: Vec<VastuRemedy>,
    calls: Vec<RecordedCall>,
    failing: HashSet<&'static str>,
    next_booking_id: u64,
}

/// In-memory consultation service.
///
/// Reports echo the requested name with a life path number of 7 unless
/// overridden with [`FakeBackend::with_life_path`] or
/// [`FakeBackend::with_report_owner`]. Booking marks the matching
/// slot unavailable. Any method can be made to fail with
/// [`FakeBackend::fail_on`].
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
    life_path: Option<u32>,
    report_owner: Option<String>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with the given slots.
    pub fn with_slots(slots: Vec<AvailableSlot>) -> Self {
        let backend = Self::new();
        backend.lock().slots = slots;
        backend
    }

    pub fn with_life_path(mut self, number: u32) -> Self {
        self.life_path = Some(number);
        self
    }

    /// Answer reports with this owner name instead of echoing the request.
    pub fn with_report_owner(mut self, owner: impl Into<String>) -> Self {
        self.report_owner = Some(owner.into());
        self
    }

    /// Make every call to `method` fail with a remote error.
    pub fn fail_on(&self, method: &'static str) {
        self.lock().failing.insert(method);
    }

    /// Let calls to `method` succeed again.
    pub fn recover(&self, method: &'static str) {
        self.lock().failing.remove(method);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of calls made to `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.lock().calls.iter().filter(|c| c.method == method).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, method: &'static str, args: &[&str]) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(RecordedCall {
            method,
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        if state.failing.contains(method) {
            return Err(Error::remote(method, -32000, "injected failure"));
        }
        Ok(())
    }
}

impl ConsultationBackend for FakeBackend {
    async fn generate_report(&self, name: &str, birth_date: &str) -> Result<NumerologyReport> {
        self.record(methods::GENERATE_REPORT, &[name, birth_date])?;
        let owner = self.report_owner.as_deref().unwrap_or(name);
        let mut report = sample_report(owner, self.life_path.unwrap_or(7));
        report.birth_date = birth_date.to_string();
        self.lock().reports.push(report.clone());
        Ok(report)
    }

    async fn generate_remedy(&self, name: &str, life_path_number: u32) -> Result<VastuRemedy> {
        self.record(
            methods::GET_VASTU_REMEDIES,
            &[name, &life_path_number.to_string()],
        )?;
        let remedy = sample_remedy(name, life_path_number);
        self.lock().remedies.push(remedy.clone());
        Ok(remedy)
    }

    async fn book_consultation(
        &self,
        name: &str,
        phone: &str,
        time_range: &str,
    ) -> Result<ConsultationBooking> {
        self.record(methods::BOOK_CONSULTATION, &[name, phone, time_range])?;
        let mut state = self.lock();

        let slot = state
            .slots
            .iter_mut()
            .find(|s| s.time_range == time_range && s.is_available)
            .ok_or_else(|| {
                Error::remote(methods::BOOK_CONSULTATION, -32001, "slot not available")
            })?;
        slot.is_available = false;

        state.next_booking_id += 1;
        let booking = ConsultationBooking {
            owner_name: name.to_string(),
            booking_id: state.next_booking_id,
            status: "Confirmed".to_string(),
            contact_number: phone.to_string(),
            selected_time_slot: time_range.to_string(),
        };
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_available_slots(&self) -> Result<Vec<AvailableSlot>> {
        self.record(methods::GET_AVAILABLE_SLOTS, &[])?;
        Ok(self.lock().slots.clone())
    }

    async fn add_available_slot(&self, time_range: &str) -> Result<AvailableSlot> {
        self.record(methods::ADD_AVAILABLE_SLOT, &[time_range])?;
        let mut state = self.lock();
        let id = state.slots.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let slot = sample_slot(id, time_range, true);
        state.slots.push(slot.clone());
        Ok(slot)
    }

    async fn list_bookings(&self) -> Result<Vec<ConsultationBooking>> {
        self.record(methods::GET_ALL_BOOKINGS, &[])?;
        Ok(self.lock().bookings.clone())
    }

    async fn list_reports(&self) -> Result<Vec<NumerologyReport>> {
        self.record(methods::GET_ALL_REPORTS, &[])?;
        Ok(self.lock().reports.clone())
    }

    async fn list_remedies(&self) -> Result<Vec<VastuRemedy>> {
        self.record(methods::GET_ALL_REMEDIES, &[])?;
        Ok(self.lock().remedies.clone())
    }
}
