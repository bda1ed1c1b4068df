//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and the full view can be rendered
//! into an in-memory buffer and searched as text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Narrow terminal for responsive layouts
pub const COMPACT_WIDTH: u16 = 50;
pub const COMPACT_HEIGHT: u16 = 20;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on a single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// All rows joined by newlines (for debugging failed assertions)
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(
            TestTerminal::compact().area(),
            Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        let area = term.area();
        term.render_widget(Paragraph::new("Hello World"), area);

        assert!(term.buffer_contains("Hello World"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(1, "Hello"));
        assert!(!term.buffer_contains("Goodbye"));
    }
}
