//! Message processing through the TEA update loop

use std::sync::Arc;

use tokio::sync::mpsc;

use vastu_backend::ConsultationBackend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up on
/// chained messages and dispatching any resulting actions.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: ConsultationBackend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(backend));
        }

        msg = result.message;
    }
}
