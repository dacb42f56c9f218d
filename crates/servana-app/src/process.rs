//! Message processing
//!
//! Runs a message through the TEA update function, following up messages
//! until none remain and dispatching every action on the way.

use tokio::sync::mpsc;

use crate::actions::{handle_action, ReplyTaskMap, Services};
use crate::checkout::PaymentGateway;
use crate::handler;
use crate::identity::IdentityProvider;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G, I>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<G, I>,
    reply_tasks: &ReplyTaskMap,
) where
    G: PaymentGateway + Sync + 'static,
    I: IdentityProvider + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        // Handle any action
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services, reply_tasks);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
