//! # vastu-core - Core Domain Types
//!
//! Foundation crate for Vastu Desk. Provides the records exchanged with the
//! consultation service, error handling, form validation and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`NumerologyReport`] - Report generated from a name and birth date
//! - [`VastuRemedy`] - Remedy derived from a report's life path number
//! - [`AvailableSlot`] - Consultation slot offered by the service
//! - [`ConsultationBooking`] - Confirmation of a booked slot
//!
//! ### Validation (`validation`, `birth_date`)
//! - [`validate_intake()`] / [`validate_booking()`] / [`validate_slot()`] - Non-short-circuiting form checks
//! - [`FieldErrors`], [`ValidationError`], [`FormField`] - Field-level failures
//! - [`parse_birth_date()`] / [`format_birth_date()`] - Typed date entry and wire format
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer, with remote-call classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use vastu_core::prelude::*;
//! ```

pub mod birth_date;
pub mod error;
pub mod logging;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all Vastu Desk crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use birth_date::{display_birth_date, format_birth_date, parse_birth_date};
pub use error::{Error, Result};
pub use types::{
    bookable_slots, AvailableSlot, ConsultationBooking, NumerologyReport, VastuRemedy,
};
pub use validation::{
    is_valid_phone, validate_booking, validate_intake, validate_slot, FieldErrors, FormField,
    ValidationError,
};
