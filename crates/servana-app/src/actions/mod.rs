//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::chat_bot::ReplyTicket;
use crate::checkout::PaymentGateway;
use crate::identity::IdentityProvider;
use crate::message::Message;
use crate::UpdateAction;

pub(super) mod external;
pub(super) mod replies;

/// Convenience type alias for scheduled bot reply tracking
pub type ReplyTaskMap = Arc<std::sync::Mutex<HashMap<ReplyTicket, tokio::task::JoinHandle<()>>>>;

/// External SDK seams used by actions
pub struct Services<G, I> {
    pub checkout: Arc<G>,
    pub identity: Arc<I>,
}

impl<G, I> Services<G, I> {
    pub fn new(checkout: G, identity: I) -> Self {
        Self {
            checkout: Arc::new(checkout),
            identity: Arc::new(identity),
        }
    }
}

impl<G, I> Clone for Services<G, I> {
    fn clone(&self) -> Self {
        Self {
            checkout: Arc::clone(&self.checkout),
            identity: Arc::clone(&self.identity),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<G, I>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<G, I>,
    reply_tasks: &ReplyTaskMap,
) where
    G: PaymentGateway + Sync + 'static,
    I: IdentityProvider + Sync + 'static,
{
    match action {
        UpdateAction::StartCheckout {
            attempt,
            provider_id,
            options,
        } => {
            external::spawn_checkout(
                Arc::clone(&services.checkout),
                attempt,
                provider_id,
                *options,
                msg_tx,
            );
        }

        UpdateAction::ScheduleBotReply {
            ticket,
            reply,
            delay,
        } => {
            replies::schedule_reply(reply_tasks, ticket, reply, delay, msg_tx);
        }

        UpdateAction::CancelBotReplies { tickets } => {
            replies::cancel_replies(reply_tasks, &tickets);
        }

        UpdateAction::Authorize => {
            external::spawn_authorize(Arc::clone(&services.identity), msg_tx);
        }

        UpdateAction::ClearSession => {
            external::spawn_clear_session(Arc::clone(&services.identity), msg_tx);
        }
    }
}
