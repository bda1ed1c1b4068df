//! Header bar with brand and view tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use vastu_app::ViewId;

use crate::theme::{palette, styles};

/// Brand on the left, visible view tabs on the right.
///
/// Tabs are numbered by their position, matching the digit shortcuts.
pub struct MainHeader<'a> {
    brand: &'a str,
    tabs: &'a [ViewId],
    active: ViewId,
}

impl<'a> MainHeader<'a> {
    pub fn new(brand: &'a str, tabs: &'a [ViewId], active: ViewId) -> Self {
        Self {
            brand,
            tabs,
            active,
        }
    }

    fn tab_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.tabs.len() * 3);
        for (index, id) in self.tabs.iter().enumerate() {
            let style = if *id == self.active {
                styles::selected_highlight()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!("{}", index + 1), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", id.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(vec![
            Span::styled(" ✦ ", Style::default().fg(palette::GOLD)),
            Span::styled(
                self.brand.to_string(),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let brand_width = brand.width() as u16;
        buf.set_line(inner.x, inner.y, &brand, inner.width);

        let tabs = self.tab_line();
        let tabs_width = tabs.width() as u16;
        let available = inner.width.saturating_sub(brand_width + 1);
        if available == 0 {
            return;
        }

        // Right-align when there is room, otherwise start after the brand and clip
        let x = if tabs_width <= available {
            inner.x + inner.width - tabs_width
        } else {
            inner.x + brand_width + 1
        };
        buf.set_line(x, inner.y, &tabs, available);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_brand_and_tabs() {
        let mut term = TestTerminal::new();
        let tabs = [ViewId::Landing, ViewId::Intake, ViewId::Booking];
        let header = MainHeader::new("Ankit's Numerology", &tabs, ViewId::Landing);

        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("Ankit's Numerology"));
        assert!(term.buffer_contains("1 Home"));
        assert!(term.buffer_contains("2 Numerology"));
        assert!(term.buffer_contains("3 Book Consultation"));
        assert!(!term.buffer_contains("Vastu"));
    }

    #[test]
    fn test_header_numbers_follow_visible_tabs() {
        let mut term = TestTerminal::with_size(100, 3);
        let tabs = ViewId::ALL;
        let header = MainHeader::new("Desk", &tabs, ViewId::Report);

        term.render_widget(header, Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains("3 Report"));
        assert!(term.buffer_contains("4 Vastu"));
    }
}
