//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use vastu_app::{AppState, IntakeStage, View};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Only mutates state to clamp reader scroll offsets to their content.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    let tabs = state.controller.visible_tabs();
    frame.render_widget(
        widgets::MainHeader::new(&state.settings.ui.brand, &tabs, state.active_view()),
        areas.header,
    );

    match state.controller.view().clone() {
        View::Landing => {
            frame.render_widget(widgets::Landing::new(&state.settings.ui.consultant), areas.body);
        }
        View::Intake => {
            frame.render_widget(
                widgets::IntakeFormView::new(&state.intake, state.animation_frame)
                    .today(chrono::Local::now().date_naive()),
                areas.body,
            );
        }
        View::Report(report) => {
            let remedy = if state.controller.has_remedy() {
                widgets::RemedyAvailability::Ready
            } else if state.intake.stage == IntakeStage::GeneratingRemedy {
                widgets::RemedyAvailability::Pending
            } else {
                widgets::RemedyAvailability::Unavailable
            };
            let reader = widgets::ReportView::new(&report, remedy);
            state.scroll.report = state.scroll.report.min(reader.max_scroll());
            frame.render_widget(reader.scroll(state.scroll.report), areas.body);
        }
        View::Remedy(remedy) => {
            let reader = widgets::RemedyView::new(&remedy);
            state.scroll.remedy = state.scroll.remedy.min(reader.max_scroll());
            frame.render_widget(reader.scroll(state.scroll.remedy), areas.body);
        }
        View::Booking => {
            frame.render_widget(
                widgets::BookingView::new(
                    &state.booking,
                    &state.slots,
                    &state.settings.ui.consultant,
                )
                .frame(state.animation_frame),
                areas.body,
            );
        }
    }

    frame.render_widget(
        widgets::StatusBar::new(state).compact(layout::use_compact_status(area)),
        areas.status,
    );

    if state.confirm_quit_visible {
        frame.render_widget(widgets::ConfirmDialog, area);
    }
}
