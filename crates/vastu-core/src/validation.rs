//! Form validation for the intake and booking forms
//!
//! Validators are pure: they inspect the submitted values and return every
//! field-level problem at once. An empty [`FieldErrors`] means the caller may
//! go ahead with the remote call.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Input fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    BirthDate,
    Phone,
    Slot,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::BirthDate => "Date of Birth",
            FormField::Phone => "Phone Number",
            FormField::Slot => "Time Slot",
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was left empty (or whitespace only).
    MissingField(FormField),
    /// Field has a value that does not match the expected shape.
    InvalidFormat(FormField),
    /// Field parsed, but lies outside the accepted range.
    OutOfRange(FormField),
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingField(f)
            | ValidationError::InvalidFormat(f)
            | ValidationError::OutOfRange(f) => *f,
        }
    }

    /// Message shown beneath the offending input.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(FormField::Name) => "Name is required",
            ValidationError::MissingField(FormField::BirthDate) => "Date of birth is required",
            ValidationError::MissingField(FormField::Phone) => "Phone number is required",
            ValidationError::MissingField(FormField::Slot) => "Please select a time slot",
            ValidationError::InvalidFormat(FormField::Phone) => "Please enter a valid phone number",
            ValidationError::InvalidFormat(FormField::BirthDate) => {
                "Use DD/MM/YYYY for the date of birth"
            }
            ValidationError::InvalidFormat(_) => "Invalid value",
            ValidationError::OutOfRange(FormField::BirthDate) => {
                "Date of birth must be between 1900 and today"
            }
            ValidationError::OutOfRange(_) => "Value out of range",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The set of validation failures for one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First error recorded against `field`, if any.
    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn has(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    /// Drop any error recorded against `field`.
    pub fn clear(&mut self, field: FormField) {
        self.errors.retain(|e| e.field() != field);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ValidationError>> for FieldErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

// ─────────────────────────────────────────────────────────────────
// Validators
// ─────────────────────────────────────────────────────────────────

/// Validate the numerology intake form.
pub fn validate_intake(name: &str, birth_date: Option<NaiveDate>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if name.trim().is_empty() {
        errors.push(ValidationError::MissingField(FormField::Name));
    }

    if birth_date.is_none() {
        errors.push(ValidationError::MissingField(FormField::BirthDate));
    }

    errors
}

/// Validate the consultation booking form. All checks run.
pub fn validate_booking(name: &str, phone: &str, slot: Option<&str>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if name.trim().is_empty() {
        errors.push(ValidationError::MissingField(FormField::Name));
    }

    if phone.trim().is_empty() {
        errors.push(ValidationError::MissingField(FormField::Phone));
    } else if !is_valid_phone(phone) {
        errors.push(ValidationError::InvalidFormat(FormField::Phone));
    }

    if slot.map_or(true, |s| s.is_empty()) {
        errors.push(ValidationError::MissingField(FormField::Slot));
    }

    errors
}

/// Validate a new slot's time range before it is offered for booking.
pub fn validate_slot(time_range: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if time_range.trim().is_empty() {
        errors.push(ValidationError::MissingField(FormField::Slot));
    }
    errors
}

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("Invalid phone number regex"));

/// Optional leading `+`, then digits, whitespace, dashes and parentheses only.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
