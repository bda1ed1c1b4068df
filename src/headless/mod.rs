//! Headless mode - NDJSON output for scripted use
//!
//! Each subcommand performs one service interaction and writes its results
//! to stdout as newline-delimited JSON, one event per line. Every event has
//! an "event" field naming its type.
//!
//! ```json
//! {"event":"report_ready","report":{"userName":"Asha",...},"timestamp":1704700001000}
//! {"event":"remedy_ready","remedy":{"userName":"Asha",...},"timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use vastu_core::{
    AvailableSlot, ConsultationBooking, FieldErrors, FormField, NumerologyReport, VastuRemedy,
};

pub use runner::{run, run_command, HeadlessStatus};

/// A single field problem in a `validation_failed` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldProblem {
    pub field: &'static str,
    pub message: &'static str,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    ReportReady {
        report: NumerologyReport,
        timestamp: i64,
    },

    RemedyReady {
        remedy: VastuRemedy,
        timestamp: i64,
    },

    /// Slots that can still be booked
    Slots {
        slots: Vec<AvailableSlot>,
        timestamp: i64,
    },

    BookingConfirmed {
        booking: ConsultationBooking,
        timestamp: i64,
    },

    SlotAdded {
        slot: AvailableSlot,
        timestamp: i64,
    },

    Bookings {
        bookings: Vec<ConsultationBooking>,
        timestamp: i64,
    },

    Reports {
        reports: Vec<NumerologyReport>,
        timestamp: i64,
    },

    Remedies {
        remedies: Vec<VastuRemedy>,
        timestamp: i64,
    },

    /// Input rejected before any remote call was made
    ValidationFailed {
        errors: Vec<FieldProblem>,
        timestamp: i64,
    },

    /// A remote call failed
    RemoteError {
        operation: String,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn report_ready(report: NumerologyReport) -> Self {
        Self::ReportReady {
            report,
            timestamp: Self::now(),
        }
    }

    pub fn remedy_ready(remedy: VastuRemedy) -> Self {
        Self::RemedyReady {
            remedy,
            timestamp: Self::now(),
        }
    }

    pub fn slots(slots: Vec<AvailableSlot>) -> Self {
        Self::Slots {
            slots,
            timestamp: Self::now(),
        }
    }

    pub fn booking_confirmed(booking: ConsultationBooking) -> Self {
        Self::BookingConfirmed {
            booking,
            timestamp: Self::now(),
        }
    }

    pub fn slot_added(slot: AvailableSlot) -> Self {
        Self::SlotAdded {
            slot,
            timestamp: Self::now(),
        }
    }

    pub fn bookings(bookings: Vec<ConsultationBooking>) -> Self {
        Self::Bookings {
            bookings,
            timestamp: Self::now(),
        }
    }

    pub fn reports(reports: Vec<NumerologyReport>) -> Self {
        Self::Reports {
            reports,
            timestamp: Self::now(),
        }
    }

    pub fn remedies(remedies: Vec<VastuRemedy>) -> Self {
        Self::Remedies {
            remedies,
            timestamp: Self::now(),
        }
    }

    pub fn validation_failed(errors: &FieldErrors) -> Self {
        Self::ValidationFailed {
            errors: errors
                .iter()
                .map(|e| FieldProblem {
                    field: field_key(e.field()),
                    message: e.message(),
                })
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn remote_error(operation: &str, message: String) -> Self {
        Self::RemoteError {
            operation: operation.to_string(),
            message,
            timestamp: Self::now(),
        }
    }
}

fn field_key(field: FormField) -> &'static str {
    match field {
        FormField::Name => "name",
        FormField::BirthDate => "birth_date",
        FormField::Phone => "phone",
        FormField::Slot => "slot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vastu_core::ValidationError;

    #[test]
    fn test_event_tag_is_snake_case() {
        let json = serde_json::to_value(HeadlessEvent::remote_error("slots", "closed".into())).unwrap();
        assert_eq!(json["event"], "remote_error");
        assert_eq!(json["operation"], "slots");
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_validation_failed_lists_fields() {
        let errors = FieldErrors::from(vec![
            ValidationError::MissingField(FormField::Name),
            ValidationError::InvalidFormat(FormField::Phone),
        ]);
        let json = serde_json::to_value(HeadlessEvent::validation_failed(&errors)).unwrap();

        assert_eq!(json["event"], "validation_failed");
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["errors"][0]["message"], "Name is required");
        assert_eq!(json["errors"][1]["field"], "phone");
    }
}
