//! Widget components for the TUI

mod booking_view;
mod confirm_dialog;
mod header;
mod intake_form;
mod landing;
mod modal_overlay;
mod remedy_view;
mod report_view;
mod status_bar;
mod text_input;

pub use booking_view::BookingView;
pub use confirm_dialog::ConfirmDialog;
pub use header::MainHeader;
pub use intake_form::IntakeFormView;
pub use landing::Landing;
pub use remedy_view::RemedyView;
pub use report_view::{RemedyAvailability, ReportView};
pub use status_bar::StatusBar;
pub use text_input::{TextInput, TEXT_INPUT_HEIGHT};
