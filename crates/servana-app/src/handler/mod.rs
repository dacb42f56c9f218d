//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `navigation`: Tabs, back navigation and list selection
//! - `booking`: Service, provider and payment handlers
//! - `orders`: Order list and status handlers
//! - `chat`: FAQ chat handlers
//! - `profile`: Identity and theme handlers

pub(crate) mod booking;
pub(crate) mod chat;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod orders;
pub(crate) mod profile;
pub(crate) mod update;


use std::time::Duration;

use crate::chat_bot::ReplyTicket;
use crate::checkout::CheckoutOptions;
use crate::message::{AttemptId, Message};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Open the checkout for a provider.
    ///
    /// The result comes back as `PaymentSucceeded` or `PaymentFailed` tagged
    /// with `attempt`. In-flight checkouts are never cancelled.
    StartCheckout {
        attempt: AttemptId,
        provider_id: u32,
        options: Box<CheckoutOptions>,
    },

    /// Deliver a bot reply after `delay`
    ScheduleBotReply {
        ticket: ReplyTicket,
        reply: String,
        delay: Duration,
    },

    /// Abort scheduled bot replies
    CancelBotReplies { tickets: Vec<ReplyTicket> },

    /// Interactive login with the identity provider
    Authorize,

    /// End the identity session
    ClearSession,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
