//! Numerology report reader

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use vastu_core::NumerologyReport;

use crate::theme::styles;

/// Scrollable report. The remedy line at the bottom tells the user whether
/// Vastu guidance is ready, still coming, or unavailable.
pub struct ReportView<'a> {
    report: &'a NumerologyReport,
    remedy: RemedyAvailability,
    scroll: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemedyAvailability {
    Ready,
    Pending,
    Unavailable,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a NumerologyReport, remedy: RemedyAvailability) -> Self {
        Self {
            report,
            remedy,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Largest useful scroll offset.
    pub fn max_scroll(&self) -> u16 {
        self.lines().len().saturating_sub(1) as u16
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let report = self.report;
        let joined_numbers = report
            .lucky_numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("  ");

        let mut lines = vec![
            Line::from(vec![
                Span::styled(report.owner_name.as_str(), styles::heading()),
                Span::styled(format!("  born {}", report.birth_date), styles::text_muted()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Life Path Number  ", styles::text_secondary()),
                Span::styled(report.life_path_number.to_string(), styles::accent_bold()),
            ]),
            Line::from(Span::styled(
                "Your core numerological vibration",
                styles::text_muted(),
            )),
            Line::default(),
            section("Birth Chart Analysis"),
            Line::from(Span::styled(
                report.birth_chart_analysis.as_str(),
                styles::text_primary(),
            )),
            Line::default(),
            section("Your Lucky Numbers"),
            Line::from(Span::styled(joined_numbers, styles::accent_bold())),
            Line::default(),
            section("Favorable Colors"),
            Line::from(Span::styled(
                report.favorable_colors.join(", "),
                styles::text_primary(),
            )),
            Line::default(),
            section("Best Career Options"),
        ];

        lines.extend(report.career_recommendations.iter().map(|career| {
            Line::from(vec![
                Span::styled("  • ", styles::accent()),
                Span::styled(career.as_str(), styles::text_primary()),
            ])
        }));

        lines.extend([
            Line::default(),
            section("Relationship Guidance"),
            Line::from(Span::styled(
                report.relationship_guidance.as_str(),
                styles::text_primary(),
            )),
            Line::default(),
            match self.remedy {
                RemedyAvailability::Ready => Line::from(vec![
                    Span::styled("[ v ]", styles::keybinding()),
                    Span::styled(" View Vastu Remedies", styles::accent_bold()),
                ]),
                RemedyAvailability::Pending => Line::from(Span::styled(
                    "Preparing your Vastu remedies...",
                    styles::text_secondary(),
                )),
                RemedyAvailability::Unavailable => Line::from(Span::styled(
                    "Vastu remedies could not be prepared for this report.",
                    styles::text_muted(),
                )),
            },
        ]);

        lines
    }
}

pub(super) fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, styles::heading()))
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Numerology Report ")
            .title_style(styles::heading());
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vastu_backend::test_utils::sample_report;

    #[test]
    fn test_report_sections() {
        let report = sample_report("Asha", 9);
        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(
            ReportView::new(&report, RemedyAvailability::Ready),
            Rect::new(0, 0, 80, 40),
        );

        assert!(term.buffer_contains("Asha"));
        assert!(term.buffer_contains("Life Path Number  9"));
        assert!(term.buffer_contains("Birth Chart Analysis"));
        assert!(term.buffer_contains("Teacher"));
        assert!(term.buffer_contains("View Vastu Remedies"));
    }

    #[test]
    fn test_scroll_hides_top_lines() {
        let report = sample_report("Asha", 9);
        let mut term = TestTerminal::with_size(80, 10);
        let view = ReportView::new(&report, RemedyAvailability::Pending);
        assert!(view.max_scroll() > 5);

        term.render_widget(view.scroll(5), Rect::new(0, 0, 80, 10));
        assert!(!term.buffer_contains("Life Path Number"));
    }
}
