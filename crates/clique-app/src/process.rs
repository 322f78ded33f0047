//! Message processing
//!
//! Runs messages through the TEA update function and dispatches the
//! resulting actions.

use std::sync::Arc;

use clique_client::{MediaSource, Transport};
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::backend::Backend;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and any follow-up messages it produces
pub fn process_message<T, S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<Backend<T, S>>,
) where
    T: Transport + Send + Sync + 'static,
    S: MediaSource + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
