//! Numerology intake form view

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use chrono::NaiveDate;

use vastu_app::{IntakeField, IntakeForm};
use vastu_core::{display_birth_date, parse_birth_date, FormField};

use super::text_input::{TextInput, TEXT_INPUT_HEIGHT};
use crate::theme::styles;

pub struct IntakeFormView<'a> {
    form: &'a IntakeForm,
    frame: u64,
    today: Option<NaiveDate>,
}

impl<'a> IntakeFormView<'a> {
    pub fn new(form: &'a IntakeForm, frame: u64) -> Self {
        Self {
            form,
            frame,
            today: None,
        }
    }

    /// Show the long form of a valid typed date beneath the input.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn date_preview(&self) -> Option<String> {
        if self.form.errors.has(FormField::BirthDate) {
            return None;
        }
        let today = self.today?;
        parse_birth_date(&self.form.birth_date, today)
            .ok()
            .flatten()
            .map(display_birth_date)
    }

    fn submit_line(&self) -> Line<'static> {
        let stage = self.form.stage;
        let focused = self.form.focus == IntakeField::Submit;

        if stage.is_busy() {
            return Line::from(vec![
                Span::styled(styles::spinner(self.frame), styles::accent()),
                Span::styled(format!(" {}", stage.button_label()), styles::text_secondary()),
            ]);
        }

        let style = if focused {
            styles::selected_highlight()
        } else {
            styles::accent_bold()
        };
        Line::from(Span::styled(format!("[ {} ]", stage.button_label()), style))
    }
}

impl Widget for IntakeFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Your Numerology Reading ")
            .title_style(styles::heading());
        let inner = block.inner(area);
        block.render(area, buf);

        let [intro, name, birth_date, submit, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(TEXT_INPUT_HEIGHT),
            Constraint::Length(TEXT_INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner.inner(ratatui::layout::Margin::new(2, 0)));

        Paragraph::new(Span::styled(
            "Enter your details to receive a personalized numerology report and Vastu remedies.",
            styles::text_secondary(),
        ))
        .render(intro, buf);

        let form = self.form;
        TextInput::new("Full Name", &form.name)
            .placeholder("Enter your full name")
            .focused(form.focus == IntakeField::Name)
            .error(form.errors.get(FormField::Name).map(|e| e.message()))
            .render(name, buf);

        TextInput::new("Date of Birth", &form.birth_date)
            .placeholder("DD/MM/YYYY")
            .focused(form.focus == IntakeField::BirthDate)
            .error(form.errors.get(FormField::BirthDate).map(|e| e.message()))
            .render(birth_date, buf);

        if let Some(preview) = self.date_preview() {
            let line = Line::from(Span::styled(format!(" {preview}"), styles::text_muted()));
            buf.set_line(birth_date.x, birth_date.y + 3, &line, birth_date.width);
        }

        buf.set_line(submit.x, submit.y, &self.submit_line(), submit.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vastu_core::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_valid_date_preview() {
        let form = IntakeForm {
            name: "Asha".to_string(),
            birth_date: "12/05/1990".to_string(),
            ..IntakeForm::default()
        };
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(
            IntakeFormView::new(&form, 0).today(today()),
            Rect::new(0, 0, 80, 20),
        );

        assert!(term.buffer_contains("12 May 1990"));
        assert!(term.buffer_contains("[ Generate Report ]"));
    }

    #[test]
    fn test_field_errors_shown() {
        let mut form = IntakeForm::new();
        form.errors.push(ValidationError::MissingField(FormField::Name));
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(IntakeFormView::new(&form, 0), Rect::new(0, 0, 80, 20));

        assert!(term.buffer_contains("Name is required"));
    }
}
