//! Delayed bot replies
//!
//! Every reply is a task keyed by its ticket in the [`ReplyTaskMap`]. A task
//! removes its own entry once it has delivered; cancelled tickets are aborted
//! and removed by the caller.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::chat_bot::ReplyTicket;
use crate::message::Message;

use super::ReplyTaskMap;

pub(super) fn schedule_reply(
    reply_tasks: &ReplyTaskMap,
    ticket: ReplyTicket,
    text: String,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) {
    let tasks = reply_tasks.clone();

    // Hold the lock across spawn so the task cannot remove its entry before it
    // is inserted.
    let Ok(mut guard) = reply_tasks.lock() else {
        warn!(ticket, "Reply task map poisoned; reply not scheduled");
        return;
    };

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if msg_tx
            .send(Message::ChatReplyReady { ticket, text })
            .await
            .is_err()
        {
            debug!(ticket, "Reply dropped: message channel closed");
        }
        if let Ok(mut guard) = tasks.lock() {
            guard.remove(&ticket);
        }
    });
    guard.insert(ticket, handle);
}

/// Abort the given replies; unknown or finished tickets are skipped
pub(super) fn cancel_replies(reply_tasks: &ReplyTaskMap, tickets: &[ReplyTicket]) {
    let Ok(mut guard) = reply_tasks.lock() else {
        warn!("Reply task map poisoned; replies not cancelled");
        return;
    };
    for ticket in tickets {
        if let Some(handle) = guard.remove(ticket) {
            handle.abort();
            debug!(ticket, "Cancelled bot reply");
        }
    }
}

/// Abort every scheduled reply (engine shutdown)
pub(crate) fn cancel_all(reply_tasks: &ReplyTaskMap) {
    if let Ok(mut guard) = reply_tasks.lock() {
        for (_, handle) in guard.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn task_map() -> ReplyTaskMap {
        Arc::new(Mutex::new(HashMap::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_delivered_after_delay() {
        let tasks = task_map();
        let (tx, mut rx) = mpsc::channel(4);

        schedule_reply(&tasks, 1, "Hi".to_string(), Duration::from_millis(1500), tx);
        assert_eq!(tasks.lock().unwrap().len(), 1);

        match rx.recv().await {
            Some(Message::ChatReplyReady { ticket, text }) => {
                assert_eq!(ticket, 1);
                assert_eq!(text, "Hi");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_never_arrives() {
        let tasks = task_map();
        let (tx, mut rx) = mpsc::channel(4);

        schedule_reply(&tasks, 7, "late".to_string(), Duration::from_secs(2), tx);
        cancel_replies(&tasks, &[7]);
        assert!(tasks.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_clears_map() {
        let tasks = task_map();
        let (tx, _rx) = mpsc::channel(4);

        schedule_reply(&tasks, 1, "a".to_string(), Duration::from_secs(1), tx.clone());
        schedule_reply(&tasks, 2, "b".to_string(), Duration::from_secs(1), tx);
        cancel_all(&tasks);

        assert!(tasks.lock().unwrap().is_empty());
    }
}
