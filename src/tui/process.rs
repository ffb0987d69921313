//! Message processing through the update loop

use tokio::sync::mpsc;

use crate::app::handler;
use crate::app::message::Message;
use crate::app::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in the same call; emitted actions are
/// dispatched to background tasks as they appear.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                state.settings.clone(),
                state.config_name.clone(),
            );
        }

        msg = result.message;
    }
}
