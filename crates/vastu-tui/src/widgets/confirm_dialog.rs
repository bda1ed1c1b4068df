//! Quit confirmation overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 7;

/// Shown when quitting with a request still in flight.
pub struct ConfirmDialog;

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        render_shadow(buf, dialog);
        Clear.render(dialog, buf);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "A request is still in progress.",
                styles::text_primary(),
            ))
            .centered(),
            Line::from(Span::styled("Quit anyway?", styles::text_secondary())).centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", styles::keybinding()),
                Span::styled(" Quit   ", styles::text_secondary()),
                Span::styled("[n]", styles::keybinding()),
                Span::styled(" Stay", styles::text_secondary()),
            ])
            .centered(),
        ];

        Paragraph::new(lines)
            .block(styles::modal_block(" Quit Vastu Desk? "))
            .render(dialog, buf);
    }
}
