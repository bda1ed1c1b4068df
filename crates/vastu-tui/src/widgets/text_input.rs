//! Labelled single-line text input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Rows a [`TextInput`] occupies: bordered box plus an error line.
pub const TEXT_INPUT_HEIGHT: u16 = 4;

/// A bordered input with its label in the border and an optional error below.
pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    error: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            error: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }

        let box_area = Rect::new(area.x, area.y, area.width, 3);
        let block = styles::glass_block(self.focused)
            .title(format!(" {} ", self.label))
            .title_style(if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            });

        let mut spans = if self.value.is_empty() && !self.focused {
            vec![Span::styled(self.placeholder, styles::text_muted())]
        } else {
            vec![Span::styled(self.value, styles::text_primary())]
        };
        if self.focused {
            spans.push(Span::styled("▏", styles::accent()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(box_area, buf);

        if let Some(error) = self.error {
            if area.height >= TEXT_INPUT_HEIGHT {
                let line = Line::from(Span::styled(format!(" {}", error), styles::status_red()));
                buf.set_line(area.x, area.y + 3, &line, area.width);
            }
        }
    }
}
