//! Engine - orchestration state for the TUI runner
//!
//! The Engine owns the application state, the message channel and the
//! consultation backend that background actions call.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use vastu_backend::ConsultationBackend;
use vastu_core::prelude::*;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::state::AppState;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Vastu Desk.
///
/// Encapsulates:
/// - TEA state management
/// - Message channel
/// - The backend shared with spawned actions
/// - Settings
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    backend: Arc<B>,
}

impl<B> Engine<B>
where
    B: ConsultationBackend + Sync + 'static,
{
    /// Create an engine around `backend` with the given settings.
    pub fn new(backend: B, settings: Settings) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            backend: Arc::new(backend),
        }
    }

    /// Listen for SIGINT/SIGTERM and turn the first one into `Message::Quit`.
    ///
    /// Unlike `q`, a signal skips the quit confirmation even while a report
    /// or booking is in flight.
    pub fn spawn_signal_handler(&self) {
        tokio::spawn(forward_shutdown(shutdown_signal(), self.msg_tx.clone()));
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

/// Send `Message::Quit` once `signal` resolves.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<&'static str>>,
{
    match signal.await {
        Ok(name) => {
            info!("{} received, shutting down", name);
            let _ = tx.send(Message::Quit).await;
        }
        Err(e) => warn!("Shutdown signals unavailable: {}", e),
    }
}

/// Resolves with the signal's name once the process is asked to stop.
#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::SlotsState;
    use crate::controller::ViewId;
    use crate::input_key::InputKey;
    use crate::intake::IntakeStage;
    use std::time::Duration;
    use vastu_backend::methods;
    use vastu_backend::test_utils::{sample_slot, FakeBackend};

    /// Process messages until `done` holds, failing after a second.
    async fn pump_until<F>(engine: &mut Engine<FakeBackend>, mut done: F)
    where
        F: FnMut(&AppState) -> bool,
    {
        let result = tokio::time::timeout(Duration::from_secs(1), async {
            while !done(&engine.state) {
                if !engine.process_next().await {
                    break;
                }
            }
        })
        .await;
        assert!(result.is_ok(), "timed out waiting for state");
    }

    fn type_text(engine: &mut Engine<FakeBackend>, text: &str) {
        for c in text.chars() {
            engine.process_message(Message::Key(InputKey::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_intake_submission_reaches_report_and_remedy() {
        let backend = FakeBackend::new().with_life_path(9);
        let mut engine = Engine::new(backend.clone(), Settings::default());

        engine.process_message(Message::ShowView(ViewId::Intake));
        type_text(&mut engine, "Asha");
        engine.process_message(Message::Key(InputKey::Tab));
        type_text(&mut engine, "12/05/1990");
        engine.process_message(Message::Key(InputKey::Enter));

        pump_until(&mut engine, |s| {
            s.controller.has_remedy() && s.intake.stage == IntakeStage::Idle
        })
        .await;

        assert_eq!(engine.state.active_view(), ViewId::Report);
        let report = engine.state.controller.session().report().unwrap();
        assert_eq!(report.owner_name, "Asha");
        assert_eq!(report.life_path_number, 9);
        assert_eq!(backend.call_count(methods::GET_VASTU_REMEDIES), 1);
    }

    #[tokio::test]
    async fn test_report_survives_remedy_failure() {
        let backend = FakeBackend::new();
        backend.fail_on(methods::GET_VASTU_REMEDIES);
        let mut engine = Engine::new(backend.clone(), Settings::default());

        engine.state.intake.name = "Asha".to_string();
        engine.state.intake.birth_date = "12/05/1990".to_string();
        engine.process_message(Message::SubmitIntake);

        pump_until(&mut engine, |s| {
            s.controller.has_report() && s.intake.stage == IntakeStage::Idle
        })
        .await;

        assert_eq!(engine.state.active_view(), ViewId::Report);
        assert!(!engine.state.controller.has_remedy());
    }

    #[tokio::test]
    async fn test_booking_refetches_available_slots() {
        let backend = FakeBackend::with_slots(vec![
            sample_slot(1, "10:00 - 11:00", true),
            sample_slot(2, "11:00 - 12:00", true),
        ]);
        let mut engine = Engine::new(backend.clone(), Settings::default());

        engine.process_message(Message::ShowView(ViewId::Booking));
        pump_until(&mut engine, |s| {
            matches!(s.slots.state(), SlotsState::Loaded(_))
        })
        .await;
        assert_eq!(backend.call_count(methods::GET_AVAILABLE_SLOTS), 1);

        type_text(&mut engine, "Asha");
        engine.process_message(Message::Key(InputKey::Tab));
        type_text(&mut engine, "+1 555-123-4567");
        engine.process_message(Message::Key(InputKey::Tab));
        engine.process_message(Message::Key(InputKey::Char(' ')));
        engine.process_message(Message::SubmitBooking);

        pump_until(&mut engine, |s| {
            s.booking.confirmation().is_some() && matches!(s.slots.state(), SlotsState::Loaded(_))
        })
        .await;

        assert_eq!(backend.call_count(methods::GET_AVAILABLE_SLOTS), 2);
        assert_eq!(engine.state.slots.bookable().len(), 1);
        assert_eq!(
            engine.state.booking.confirmation().map(|b| b.selected_time_slot.as_str()),
            Some("10:00 - 11:00")
        );
    }

    #[tokio::test]
    async fn test_failed_booking_returns_to_editing() {
        let backend = FakeBackend::with_slots(vec![sample_slot(1, "10:00 - 11:00", true)]);
        backend.fail_on(methods::BOOK_CONSULTATION);
        let mut engine = Engine::new(backend.clone(), Settings::default());

        engine.state.booking.name = "Asha".to_string();
        engine.state.booking.phone = "12345".to_string();
        engine.state.booking.selected_slot = Some("10:00 - 11:00".to_string());
        engine.process_message(Message::SubmitBooking);
        assert!(engine.state.booking.is_submitting());

        pump_until(&mut engine, |s| !s.booking.is_submitting()).await;
        assert!(engine.state.booking.confirmation().is_none());
        assert_eq!(engine.state.booking.name, "Asha");
    }

    #[tokio::test]
    async fn test_shutdown_signal_quits_mid_request() {
        let mut engine = Engine::new(FakeBackend::new(), Settings::default());
        engine.state.intake.stage = IntakeStage::GeneratingReport;

        forward_shutdown(async { Ok("SIGTERM") }, engine.msg_sender()).await;
        engine.drain_pending_messages();

        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_unavailable_signals_leave_engine_running() {
        let mut engine = Engine::new(FakeBackend::new(), Settings::default());

        forward_shutdown(
            async { Err(Error::Io(std::io::Error::other("no signal driver"))) },
            engine.msg_sender(),
        )
        .await;

        assert_eq!(engine.drain_pending_messages(), 0);
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_signal_handler_waits_for_signal() {
        let mut engine = Engine::new(FakeBackend::new(), Settings::default());
        engine.spawn_signal_handler();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_drain_pending_messages() {
        let mut engine = Engine::new(FakeBackend::new(), Settings::default());
        let tx = engine.msg_sender();
        tx.send(Message::Tick).await.unwrap();
        tx.send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(engine.should_quit());
    }
}
