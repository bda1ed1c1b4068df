//! Numerology intake form
//!
//! Collects the name and date of birth, validates them, and tracks the
//! progress of the two-stage report/remedy pipeline started on submit.

use chrono::NaiveDate;

use vastu_core::{format_birth_date, parse_birth_date, validate_intake, FieldErrors, FormField};

/// Focusable elements of the intake form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeField {
    #[default]
    Name,
    BirthDate,
    Submit,
}

impl IntakeField {
    pub fn next(self) -> Self {
        match self {
            IntakeField::Name => IntakeField::BirthDate,
            IntakeField::BirthDate => IntakeField::Submit,
            IntakeField::Submit => IntakeField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            IntakeField::Name => IntakeField::Submit,
            IntakeField::BirthDate => IntakeField::Name,
            IntakeField::Submit => IntakeField::BirthDate,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, IntakeField::Submit)
    }

    fn form_field(self) -> Option<FormField> {
        match self {
            IntakeField::Name => Some(FormField::Name),
            IntakeField::BirthDate => Some(FormField::BirthDate),
            IntakeField::Submit => None,
        }
    }
}

/// Where the intake pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeStage {
    #[default]
    Idle,
    GeneratingReport,
    GeneratingRemedy,
}

impl IntakeStage {
    pub fn is_busy(&self) -> bool {
        !matches!(self, IntakeStage::Idle)
    }

    /// Label for the submit button.
    pub fn button_label(&self) -> &'static str {
        match self {
            IntakeStage::Idle => "Generate Report",
            IntakeStage::GeneratingReport => "Generating Report...",
            IntakeStage::GeneratingRemedy => "Preparing Vastu Remedies...",
        }
    }
}

/// A validated intake submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRequest {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl IntakeRequest {
    /// Birth date as sent to the service (`DD/MM/YYYY`).
    pub fn wire_birth_date(&self) -> String {
        format_birth_date(self.birth_date)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub name: String,
    /// Raw typed date text.
    pub birth_date: String,
    pub focus: IntakeField,
    pub errors: FieldErrors,
    pub stage: IntakeStage,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_value(&mut self) -> Option<&mut String> {
        match self.focus {
            IntakeField::Name => Some(&mut self.name),
            IntakeField::BirthDate => Some(&mut self.birth_date),
            IntakeField::Submit => None,
        }
    }

    fn clear_focused_error(&mut self) {
        if let Some(field) = self.focus.form_field() {
            self.errors.clear(field);
        }
    }

    /// Append a character to the focused field. Editing a field clears its error.
    pub fn input_char(&mut self, c: char) {
        if self.stage.is_busy() {
            return;
        }
        if let Some(value) = self.focused_value() {
            value.push(c);
            self.clear_focused_error();
        }
    }

    pub fn backspace(&mut self) {
        if self.stage.is_busy() {
            return;
        }
        if let Some(value) = self.focused_value() {
            value.pop();
            self.clear_focused_error();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate the form.
    ///
    /// On success the errors are cleared and a request is returned; otherwise
    /// every field-level error is stored and `None` is returned. Field values
    /// are kept either way.
    pub fn submit(&mut self, today: NaiveDate) -> Option<IntakeRequest> {
        let parsed = parse_birth_date(&self.birth_date, today);
        let mut errors = validate_intake(&self.name, parsed.ok().flatten());
        if let Err(date_error) = parsed {
            errors.clear(FormField::BirthDate);
            errors.push(date_error);
        }

        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors.clear(FormField::Name);
        self.errors.clear(FormField::BirthDate);
        let birth_date = parsed.ok().flatten()?;
        Some(IntakeRequest {
            name: self.name.clone(),
            birth_date,
        })
    }
}
