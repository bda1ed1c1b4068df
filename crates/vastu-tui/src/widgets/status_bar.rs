//! Status bar widget
//!
//! Shows the current notice or pending request on the left and the key
//! hints for the active view on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use vastu_app::{AppState, BookingField, IntakeField, NoticeLevel, ViewId};

use crate::theme::{palette, styles};

/// Status bar widget showing notices, activity and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
    compact: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            compact: false,
        }
    }

    /// Drop the key hints and shorten activity labels.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn activity(&self) -> Option<&'static str> {
        let state = self.state;
        if state.intake.stage.is_busy() {
            Some(state.intake.stage.button_label())
        } else if state.booking.is_submitting() {
            Some("Booking consultation...")
        } else if state.slots.is_loading() {
            Some("Loading slots...")
        } else {
            None
        }
    }

    fn left_segments(&self) -> Vec<Span<'static>> {
        let mut segments = vec![Span::raw(" ")];

        if let Some(notice) = &self.state.notice {
            let (icon, style) = match notice.level {
                NoticeLevel::Info => ("●", styles::status_green()),
                NoticeLevel::Warning => ("▲", styles::status_yellow()),
            };
            segments.push(Span::styled(format!("{icon} {}", notice.text), style));
        } else if let Some(activity) = self.activity() {
            segments.push(Span::styled(
                styles::spinner(self.state.animation_frame),
                styles::accent(),
            ));
            if !self.compact {
                segments.push(Span::styled(format!(" {activity}"), styles::text_secondary()));
            }
        } else {
            segments.push(Span::styled("● Ready", styles::text_muted()));
        }

        segments
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let state = self.state;
        match state.active_view() {
            ViewId::Landing => vec![("Enter", "start"), ("b", "book"), ("q", "quit")],
            ViewId::Intake => match state.intake.focus {
                IntakeField::Submit => {
                    vec![("Enter", "generate"), ("Tab", "next"), ("Esc", "back")]
                }
                _ => vec![("Tab", "next"), ("Enter", "generate"), ("Esc", "back")],
            },
            ViewId::Report => {
                let mut hints = vec![("↑↓", "scroll")];
                if state.controller.has_remedy() {
                    hints.push(("v", "vastu"));
                }
                hints.extend([("b", "book"), ("q", "quit")]);
                hints
            }
            ViewId::Remedy => vec![("↑↓", "scroll"), ("r", "report"), ("b", "book"), ("q", "quit")],
            ViewId::Booking => {
                if state.booking.confirmation().is_some() {
                    vec![("Enter", "book another"), ("Esc", "home")]
                } else if state.booking.focus == BookingField::Slots {
                    vec![("↑↓", "move"), ("Space", "select"), ("^R", "refresh"), ("Tab", "next")]
                } else {
                    vec![("Tab", "next"), ("^R", "refresh"), ("Esc", "home")]
                }
            }
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let left = Line::from(self.left_segments());
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        if self.compact {
            return;
        }

        let hints = self.hint_line();
        let hints_width = hints
            .spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
            .sum::<usize>() as u16;

        // Hints only when they fit beside the left segment
        if left_width + hints_width < area.width {
            let x = area.x + area.width - hints_width;
            buf.set_line(x, area.y, &hints, hints_width);
        }
    }
}
