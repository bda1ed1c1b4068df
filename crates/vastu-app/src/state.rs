//! Application state (Model in TEA pattern)

use crate::booking::{BookingForm, SlotCache};
use crate::config::Settings;
use crate::controller::{ViewController, ViewId};
use crate::intake::IntakeForm;

/// Ticks a notice stays visible (50ms per tick).
pub const NOTICE_TICKS: u32 = 100;

/// Application run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Transient status-bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub ticks_left: u32,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
            ticks_left: NOTICE_TICKS,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Warning,
            ticks_left: NOTICE_TICKS,
        }
    }
}

/// Scroll offsets of the report and remedy readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderScroll {
    pub report: u16,
    pub remedy: u16,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Active view and committed results
    pub controller: ViewController,

    pub intake: IntakeForm,

    pub booking: BookingForm,

    pub slots: SlotCache,

    /// Sequence number of the latest intake submission
    pub generation: u64,

    pub notice: Option<Notice>,

    pub scroll: ReaderScroll,

    /// Quit confirmation overlay visible
    pub confirm_quit_visible: bool,

    pub settings: Settings,

    /// Spinner frame counter, advanced on every tick
    pub animation_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            controller: ViewController::new(),
            intake: IntakeForm::new(),
            booking: BookingForm::new(),
            slots: SlotCache::new(),
            generation: 0,
            notice: None,
            scroll: ReaderScroll::default(),
            confirm_quit_visible: false,
            settings,
            animation_frame: 0,
        }
    }

    pub fn active_view(&self) -> ViewId {
        self.controller.active()
    }

    /// Whether any remote call is outstanding.
    pub fn has_pending_calls(&self) -> bool {
        self.intake.stage.is_busy() || self.booking.is_submitting() || self.slots.is_loading()
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Count down the current notice; drop it when expired.
    pub fn tick_notice(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    /// Request quit - shows confirmation if calls are pending and confirm_quit is enabled
    pub fn request_quit(&mut self) {
        if self.has_pending_calls() && self.settings.behavior.confirm_quit {
            self.confirm_quit_visible = true;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.confirm_quit_visible = false;
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit_visible = false;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::IntakeStage;

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert_eq!(state.active_view(), ViewId::Landing);
        assert!(!state.has_pending_calls());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_request_quit_idle_quits_immediately() {
        let mut state = AppState::new();
        state.request_quit();
        assert!(state.should_quit());
        assert!(!state.confirm_quit_visible);
    }

    #[test]
    fn test_request_quit_while_busy_asks_first() {
        let mut state = AppState::new();
        state.intake.stage = IntakeStage::GeneratingReport;

        state.request_quit();
        assert!(state.confirm_quit_visible);
        assert!(!state.should_quit());

        state.cancel_quit();
        assert!(!state.confirm_quit_visible);

        state.request_quit();
        state.confirm_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_request_quit_without_confirmation_setting() {
        let mut settings = Settings::default();
        settings.behavior.confirm_quit = false;
        let mut state = AppState::with_settings(settings);
        state.slots.begin_fetch();

        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_notice_expires() {
        let mut state = AppState::new();
        state.show_notice(Notice::info("hello"));
        for _ in 0..NOTICE_TICKS - 1 {
            state.tick_notice();
        }
        assert!(state.notice.is_some());
        state.tick_notice();
        assert!(state.notice.is_none());
    }
}
