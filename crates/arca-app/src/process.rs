//! Message processing
//!
//! Runs a message through the TEA update function, follows up chained
//! messages, and dispatches any resulting actions.

use std::sync::Arc;

use arca_client::AnalysisApi;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: AnalysisApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(api));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
