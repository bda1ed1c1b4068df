//! Shared modal overlay utilities.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow to the right and below `modal_rect`.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);

    for y in modal_rect.y.saturating_add(1)..=bottom_y {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_style(shadow_style);
        }
    }
    for x in modal_rect.x.saturating_add(1)..=right_x {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_style(shadow_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(modal, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let modal = centered_rect(100, 50, Rect::new(0, 0, 30, 10));
        assert_eq!(modal, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_shadow_drawn_right_and_below() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        render_shadow(&mut buf, Rect::new(1, 0, 6, 3));
        assert_eq!(buf[(7, 2)].bg, palette::SHADOW);
        assert_eq!(buf[(4, 3)].bg, palette::SHADOW);
        assert_ne!(buf[(0, 0)].bg, palette::SHADOW);
    }

    #[test]
    fn test_shadow_at_buffer_edge_is_clipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        render_shadow(&mut buf, Rect::new(2, 1, 8, 4));
        assert_ne!(buf[(9, 4)].bg, palette::SHADOW);
    }
}
