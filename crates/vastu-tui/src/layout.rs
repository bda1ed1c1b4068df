//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal width for full status bar hints
pub const MIN_FULL_STATUS_WIDTH: u16 = 70;

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header with tabs
        Constraint::Min(5),    // Active view
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Check if we should use compact status bar
pub fn use_compact_status(area: Rect) -> bool {
    area.width < MIN_FULL_STATUS_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas_cover_screen() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.body.height, 20);
        assert_eq!(areas.status.y, 23);
    }

    #[test]
    fn test_compact_status_threshold() {
        assert!(use_compact_status(Rect::new(0, 0, 40, 10)));
        assert!(!use_compact_status(Rect::new(0, 0, 80, 10)));
    }
}
