//! Consultation booking form and confirmation card

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use vastu_app::{BookingField, BookingForm, SlotCache, SlotsState};
use vastu_core::{AvailableSlot, ConsultationBooking, FormField};

use super::text_input::{TextInput, TEXT_INPUT_HEIGHT};
use crate::theme::styles;

const DETAILS_WIDTH: u16 = 30;
const EMPTY_SLOTS: &str = "No available slots at the moment. Please check back later.";

pub struct BookingView<'a> {
    form: &'a BookingForm,
    slots: &'a SlotCache,
    consultant: &'a str,
    frame: u64,
}

impl<'a> BookingView<'a> {
    pub fn new(form: &'a BookingForm, slots: &'a SlotCache, consultant: &'a str) -> Self {
        Self {
            form,
            slots,
            consultant,
            frame: 0,
        }
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Book Consultation ")
            .title_style(styles::heading());
        let inner = block.inner(area).inner(Margin::new(2, 0));
        block.render(area, buf);

        let form = self.form;
        let bookable = self.slots.bookable();
        let slot_rows = (bookable.len().max(1) as u16).saturating_add(1);

        let [name, phone, slots, slot_error, submit, _] = Layout::vertical([
            Constraint::Length(TEXT_INPUT_HEIGHT),
            Constraint::Length(TEXT_INPUT_HEIGHT),
            Constraint::Length(slot_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        TextInput::new("Full Name", &form.name)
            .placeholder("Enter your full name")
            .focused(form.focus == BookingField::Name)
            .error(form.errors.get(FormField::Name).map(|e| e.message()))
            .render(name, buf);

        TextInput::new("Phone Number", &form.phone)
            .placeholder("+91 98765 43210")
            .focused(form.focus == BookingField::Phone)
            .error(form.errors.get(FormField::Phone).map(|e| e.message()))
            .render(phone, buf);

        Paragraph::new(self.slot_lines(&bookable)).render(slots, buf);

        if let Some(err) = form.errors.get(FormField::Slot) {
            buf.set_line(
                slot_error.x,
                slot_error.y,
                &Line::from(Span::styled(err.message(), styles::status_red())),
                slot_error.width,
            );
        }

        buf.set_line(submit.x, submit.y, &self.submit_line(), submit.width);
    }

    fn slot_lines(&self, bookable: &[AvailableSlot]) -> Vec<Line<'static>> {
        let picker_focused = self.form.focus == BookingField::Slots;
        let title_style = if picker_focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let mut lines = vec![Line::from(Span::styled("Available Time Slots", title_style))];

        match self.slots.state() {
            SlotsState::Loading | SlotsState::Stale => {
                lines.push(Line::from(vec![
                    Span::styled(styles::spinner(self.frame), styles::accent()),
                    Span::styled(" Loading slots…", styles::text_muted()),
                ]));
            }
            SlotsState::Failed => {
                lines.push(Line::from(Span::styled(EMPTY_SLOTS, styles::text_muted())));
            }
            SlotsState::Loaded(_) if bookable.is_empty() => {
                lines.push(Line::from(Span::styled(EMPTY_SLOTS, styles::text_muted())));
            }
            SlotsState::Loaded(_) => {
                for (index, slot) in bookable.iter().enumerate() {
                    let chosen = self.form.selected_slot.as_deref() == Some(slot.time_range.as_str());
                    let marker = if chosen { "(•) " } else { "( ) " };
                    let style = if picker_focused && index == self.form.slot_cursor {
                        styles::selected_highlight()
                    } else if chosen {
                        styles::accent()
                    } else {
                        styles::text_primary()
                    };
                    lines.push(Line::from(Span::styled(
                        format!("{marker}{}", slot.time_range),
                        style,
                    )));
                }
            }
        }

        lines
    }

    fn submit_line(&self) -> Line<'static> {
        if self.form.is_submitting() {
            return Line::from(vec![
                Span::styled(styles::spinner(self.frame), styles::accent()),
                Span::styled(" Booking...", styles::text_secondary()),
            ]);
        }
        let style = if self.form.focus == BookingField::Submit {
            styles::selected_highlight()
        } else {
            styles::accent_bold()
        };
        Line::from(Span::styled("[ Book Consultation ]", style))
    }

    fn render_confirmation(&self, booking: &ConsultationBooking, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Booking Confirmed! ")
            .title_style(styles::status_green());

        let detail = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<12}"), styles::text_muted()),
                Span::styled(value, styles::text_primary()),
            ])
        };

        let lines = vec![
            Line::default(),
            Line::from(Span::styled("✓ Booking Confirmed!", styles::status_green())).centered(),
            Line::default(),
            detail("Booking ID", format!("#{}", booking.booking_id)),
            detail("Name", booking.owner_name.clone()),
            detail("Phone", booking.contact_number.clone()),
            detail("Time Slot", booking.selected_time_slot.clone()),
            detail("Status", booking.status.clone()),
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "Thank you for booking a consultation with {}. \
                     You will receive a confirmation call shortly.",
                    self.consultant
                ),
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" Book Another Consultation", styles::accent_bold()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

struct SessionDetails;

impl Widget for SessionDetails {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Session Details ")
            .title_style(styles::heading());

        let row = |label: &'static str, value: &'static str| {
            [
                Line::from(Span::styled(label, styles::text_muted())),
                Line::from(Span::styled(value, styles::text_primary())),
                Line::default(),
            ]
        };

        let lines: Vec<Line> = [
            row("Duration", "60 minutes"),
            row("Format", "Video Call / Phone"),
            row("Language", "English / Hindi"),
        ]
        .into_iter()
        .flatten()
        .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for BookingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(booking) = self.form.confirmation() {
            let card = area.inner(Margin::new(area.width.saturating_sub(72) / 2, 0));
            self.render_confirmation(booking, card, buf);
            return;
        }

        if area.width < DETAILS_WIDTH * 2 {
            self.render_form(area, buf);
            return;
        }

        let [form, details] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(DETAILS_WIDTH)])
                .areas(area);
        self.render_form(form, buf);
        SessionDetails.render(details, buf);
    }
}
