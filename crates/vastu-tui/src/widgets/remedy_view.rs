//! Vastu remedy reader

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use vastu_core::VastuRemedy;

use super::report_view::section;
use crate::theme::styles;

pub struct RemedyView<'a> {
    remedy: &'a VastuRemedy,
    scroll: u16,
}

impl<'a> RemedyView<'a> {
    pub fn new(remedy: &'a VastuRemedy) -> Self {
        Self { remedy, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn max_scroll(&self) -> u16 {
        self.lines().len().saturating_sub(1) as u16
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let remedy = self.remedy;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Personalized remedies for {}", remedy.owner_name),
                styles::text_secondary(),
            )),
            Line::from(vec![
                Span::styled("Numerology number  ", styles::text_muted()),
                Span::styled(remedy.numerology_number.to_string(), styles::accent_bold()),
            ]),
            Line::default(),
            section("Preferred Directions"),
            Line::from(Span::styled(
                remedy.preferred_directions.join("  ·  "),
                styles::accent(),
            )),
            Line::default(),
            section("Vastu Suggestions"),
        ];

        lines.extend(remedy.vastu_suggestions.iter().enumerate().map(|(i, tip)| {
            Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), styles::accent()),
                Span::styled(tip.as_str(), styles::text_primary()),
            ])
        }));

        lines.extend([
            Line::default(),
            section("Implementation Guide"),
            Line::from(Span::styled(
                remedy.remedy_instructions.as_str(),
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Note: ", styles::status_yellow()),
                Span::styled(
                    "Vastu remedies work best when implemented gradually and with positive intention. \
                     Consult a professional for major structural changes.",
                    styles::text_muted(),
                ),
            ]),
        ]);

        lines
    }
}

impl Widget for RemedyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Vastu Shastra Guidance ")
            .title_style(styles::heading());
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
