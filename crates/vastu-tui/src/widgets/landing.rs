//! Landing view: introduction and call to action

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct Landing<'a> {
    consultant: &'a str,
}

impl<'a> Landing<'a> {
    pub fn new(consultant: &'a str) -> Self {
        Self { consultant }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let consultant = self.consultant;
        vec![
            Line::default(),
            Line::from(Span::styled("Unlock Your Destiny", styles::heading())).centered(),
            Line::from(Span::styled(
                format!(
                    "Discover the ancient wisdom of Numerology and Vastu with {}",
                    consultant
                ),
                styles::text_secondary(),
            ))
            .centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("[ Enter ]", styles::keybinding()),
                Span::styled(" Get Your Reading", styles::accent_bold()),
                Span::raw("    "),
                Span::styled("[ b ]", styles::keybinding()),
                Span::styled(" Book a Consultation", styles::accent_bold()),
            ])
            .centered(),
            Line::default(),
            Line::from(Span::styled(format!("Meet {}", consultant), styles::heading())),
            Line::from(Span::styled(
                "Expert Numerologist & Vastu Consultant with over 10 years of experience \
                 helping people discover their true potential and harmonize their living spaces.",
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(Span::styled("The Science of Numbers", styles::heading())),
            Line::from(Span::styled(
                "Your name and birth date hold vibrations that influence your personality, \
                 relationships and destiny. Combined with Vastu Shastra, the Indian science of \
                 spatial harmony, you can align your home with them.",
                styles::text_primary(),
            )),
            Line::default(),
            feature("Birth Chart Analysis", "Insights into your life path and personality"),
            feature("Lucky Numbers & Colors", "Numbers and colors that carry positive energy"),
            feature("Vastu Remedies", "Guidance for your living space, tuned to your number"),
        ]
    }
}

fn feature(title: &'static str, detail: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ✦ ", styles::accent()),
        Span::styled(title, styles::accent_bold()),
        Span::styled(" - ", styles::text_muted()),
        Span::styled(detail, styles::text_secondary()),
    ])
}

impl Widget for Landing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        Paragraph::new(self.lines())
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
