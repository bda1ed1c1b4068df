//! Main TUI runner - entry point and event loop

use vastu_app::config::Settings;
use vastu_app::Engine;
use vastu_backend::ConsultationBackend;
use vastu_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against `backend` until the user quits.
pub async fn run<B>(backend: B, settings: Settings) -> Result<()>
where
    B: ConsultationBackend + Sync + 'static,
{
    info!("Starting TUI (backend: {})", settings.backend.url);

    let mut term = terminal::init()?;
    let mut engine = Engine::new(backend, settings);
    engine.spawn_signal_handler();

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("TUI stopped");
    result
}

fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: ConsultationBackend + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from background requests and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
