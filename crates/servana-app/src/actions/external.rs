//! Checkout and identity calls
//!
//! Each call runs on its own task and reports back through the message
//! channel. None of these tasks are tracked: a checkout cannot be recalled once
//! opened, and identity calls finish on their own.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use servana_core::Error;

use crate::checkout::{CheckoutOptions, PaymentGateway};
use crate::identity::IdentityProvider;
use crate::message::{AttemptId, Message};

pub(super) fn spawn_checkout<G>(
    checkout: Arc<G>,
    attempt: AttemptId,
    provider_id: u32,
    options: CheckoutOptions,
    msg_tx: mpsc::Sender<Message>,
) where
    G: PaymentGateway + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match checkout.open(options).await {
            Ok(success) => {
                info!(attempt, "Checkout approved: {}", success.payment_reference);
                Message::PaymentSucceeded {
                    attempt,
                    provider_id,
                    payment_reference: success.payment_reference,
                }
            }
            Err(failure) => Message::PaymentFailed {
                attempt,
                description: failure.description,
            },
        };
        if msg_tx.send(message).await.is_err() {
            warn!(attempt, "Checkout result dropped: message channel closed");
        }
    });
}

pub(super) fn spawn_authorize<I>(identity: Arc<I>, msg_tx: mpsc::Sender<Message>)
where
    I: IdentityProvider + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match identity.authorize().await {
            Ok(user) => Message::LoginCompleted(user),
            Err(e) if e.is_cancellation() => Message::IdentityCancelled,
            Err(e) => Message::IdentityFailed {
                message: e.to_string(),
            },
        };
        if msg_tx.send(message).await.is_err() {
            warn!("{}", Error::channel_send("identity result"));
        }
    });
}

pub(super) fn spawn_clear_session<I>(identity: Arc<I>, msg_tx: mpsc::Sender<Message>)
where
    I: IdentityProvider + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match identity.clear_session().await {
            Ok(()) => Message::LogoutCompleted,
            Err(e) if e.is_cancellation() => Message::IdentityCancelled,
            Err(e) => Message::IdentityFailed {
                message: e.to_string(),
            },
        };
        if msg_tx.send(message).await.is_err() {
            warn!("{}", Error::channel_send("identity result"));
        }
    });
}
