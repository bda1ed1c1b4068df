//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every remote call runs in its own task and reports back through the
//! message channel. Errors are logged here and turned into `*Failed`
//! messages.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use vastu_backend::ConsultationBackend;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::pipeline::run_intake_pipeline;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: ConsultationBackend + Sync + 'static,
{
    match action {
        UpdateAction::RunIntakePipeline {
            generation,
            request,
        } => {
            tokio::spawn(async move {
                run_intake_pipeline(&*backend, &request, &msg_tx, |event| Message::Pipeline {
                    generation,
                    event,
                })
                .await;
            });
        }

        UpdateAction::FetchSlots { seq } => {
            tokio::spawn(async move {
                let msg = match backend.list_available_slots().await {
                    Ok(slots) => Message::SlotsLoaded { seq, slots },
                    Err(e) => {
                        error!("Error fetching available slots: {}", e);
                        Message::SlotsFailed {
                            seq,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::BookConsultation { request } => {
            tokio::spawn(async move {
                info!("Booking consultation for {}", request.time_range);
                let msg = match backend
                    .book_consultation(&request.name, &request.phone, &request.time_range)
                    .await
                {
                    Ok(booking) => Message::BookingConfirmed { booking },
                    Err(e) => {
                        error!("Error booking consultation: {}", e);
                        Message::BookingFailed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}
