//! FAQ chat handlers

use crate::chat_bot::{reply_delay, ReplyTicket};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Send the input line and schedule the canned reply after a random delay
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some((ticket, reply)) = state.chat.submit() else {
        return UpdateResult::none();
    };
    let delay = reply_delay(&state.settings.chat, &mut rand::thread_rng());
    tracing::debug!(ticket, "Bot reply in {:?}", delay);

    UpdateResult::action(UpdateAction::ScheduleBotReply {
        ticket,
        reply: reply.to_string(),
        delay,
    })
}

pub fn handle_quick_reply(state: &mut AppState, index: usize) -> UpdateResult {
    if !state.chat.apply_quick_reply(index) {
        tracing::debug!("No quick reply at {}", index);
    }
    UpdateResult::none()
}

pub fn handle_reply_ready(state: &mut AppState, ticket: ReplyTicket, text: String) -> UpdateResult {
    if !state.chat.deliver(ticket, text) {
        tracing::debug!(ticket, "Dropped stale bot reply");
    }
    UpdateResult::none()
}

/// Restart the conversation and cancel outstanding replies
pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let tickets = state.chat.reset();
    if tickets.is_empty() {
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::CancelBotReplies { tickets })
    }
}
