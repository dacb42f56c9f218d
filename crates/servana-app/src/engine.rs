//! Engine - shared orchestration for frontends
//!
//! Owns the [`AppState`], the unified message channel, the SDK seams and the
//! background task bookkeeping. Frontends feed it messages and render its
//! state; the TUI runner is one such frontend.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::actions::{replies, ReplyTaskMap, Services};
use crate::checkout::{PaymentGateway, SimulatedCheckout};
use crate::config::Settings;
use crate::identity::{IdentityProvider, LocalIdentity};
use crate::message::Message;
use crate::process::process_message;
use crate::signals;
use crate::state::AppState;
use crate::theme::{detect_system_appearance, Appearance};

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// How often the host appearance is re-sampled
const APPEARANCE_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub struct Engine<G = SimulatedCheckout, I = LocalIdentity> {
    pub state: AppState,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    services: Services<G, I>,
    reply_tasks: ReplyTaskMap,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Engine {
    /// Engine backed by the local checkout and identity stand-ins
    pub fn from_settings(settings: Settings, system: Appearance) -> Self {
        let checkout = SimulatedCheckout::from_settings(&settings.payment);
        let identity = LocalIdentity::from_settings(&settings.identity);
        Self::new(AppState::with_settings(settings, system), checkout, identity)
    }
}

impl<G, I> Engine<G, I>
where
    G: PaymentGateway + Sync + 'static,
    I: IdentityProvider + Sync + 'static,
{
    pub fn new(state: AppState, checkout: G, identity: I) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            state,
            msg_tx,
            msg_rx,
            services: Services::new(checkout, identity),
            reply_tasks: Arc::new(std::sync::Mutex::new(HashMap::new())),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Sender for the unified message channel
    pub fn sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Spawn the signal handler and the appearance watcher
    pub fn start_background_tasks(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
        spawn_appearance_watcher(
            self.msg_tx.clone(),
            self.shutdown_rx.clone(),
            detect_system_appearance(),
        );
    }

    pub fn process_message(&mut self, message: Message) {
        process_message(
            &mut self.state,
            message,
            &self.msg_tx,
            &self.services,
            &self.reply_tasks,
        );
    }

    /// Process every message already queued on the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(message) = self.msg_rx.try_recv() {
            self.process_message(message);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of scheduled bot replies not yet delivered or cancelled
    pub fn pending_reply_tasks(&self) -> usize {
        self.reply_tasks.lock().map(|g| g.len()).unwrap_or(0)
    }

    /// Stop background tasks and cancel scheduled replies.
    ///
    /// In-flight checkouts are left alone.
    pub fn shutdown(&mut self) {
        tracing::info!("Engine shutting down");
        let _ = self.shutdown_tx.send(true);
        replies::cancel_all(&self.reply_tasks);
    }
}

/// Re-sample the host appearance and report changes
fn spawn_appearance_watcher(
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
    initial: Appearance,
) {
    tokio::spawn(async move {
        let mut last = initial;
        let mut interval = tokio::time::interval(APPEARANCE_POLL_INTERVAL);
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let current = detect_system_appearance();
                    if current != last {
                        last = current;
                        if msg_tx.send(Message::SystemAppearanceChanged(current)).await.is_err() {
                            break;
                        }
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
        tracing::debug!("Appearance watcher stopped");
    });
}
