//! services/client/src/widgets/chat.rs
//!
//! The scripted chat widget: it records what the user types and, after a short
//! delay, appends the responder's canned reply.

use athletic_spirit_core::domain::{Transcript, Turn};
use athletic_spirit_core::responder::Responder;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

/// Identifies one scheduled bot reply.
pub type ReplyId = Uuid;

pub struct ChatWidget {
    transcript: Arc<Mutex<Transcript>>,
    input: Mutex<String>,
    responder: Arc<Responder>,
    delay: Duration,
    pending: Arc<Mutex<HashMap<ReplyId, JoinHandle<()>>>>,
    /// Cancelled on teardown; every pending reply listens to it.
    shutdown: CancellationToken,
}

impl ChatWidget {
    pub fn new(responder: Responder, delay: Duration) -> Self {
        Self {
            transcript: Arc::new(Mutex::new(Transcript::new())),
            input: Mutex::new(String::new()),
            responder: Arc::new(responder),
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
            shutdown: CancellationToken::new(),
        }
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        *self.input.lock().await = text.into();
    }

    pub async fn input(&self) -> String {
        self.input.lock().await.clone()
    }

    /// Sends the current draft.
    ///
    /// Blank drafts are ignored and left in place, as is everything once the
    /// widget has been torn down. Otherwise the user turn is appended now, the
    /// draft is cleared, and the reply is scheduled.
    pub async fn send(&self) -> Option<ReplyId> {
        if self.shutdown.is_cancelled() {
            debug!("Chat is torn down; ignoring send");
            return None;
        }
        let text = {
            let mut input = self.input.lock().await;
            if input.trim().is_empty() {
                return None;
            }
            std::mem::take(&mut *input)
        };

        let reply = self.responder.reply_to(&text).to_string();
        self.transcript.lock().await.push_user(text);
        Some(self.schedule_reply(reply).await)
    }

    /// Types `text` into the draft and sends it.
    pub async fn submit(&self, text: impl Into<String>) -> Option<ReplyId> {
        self.set_input(text).await;
        self.send().await
    }

    /// Appends `reply` once the delay elapses, unless the widget is torn down first.
    ///
    /// Replies are independent: several may be pending at once and each lands
    /// when its own timer fires.
    async fn schedule_reply(&self, reply: String) -> ReplyId {
        let id = Uuid::new_v4();
        let transcript = self.transcript.clone();
        let pending = self.pending.clone();
        let shutdown = self.shutdown.clone();
        let delay = self.delay;

        // Held across the spawn so the task cannot deregister before it is registered.
        let mut registry = self.pending.lock().await;
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Reply {} cancelled", id);
                }
                _ = tokio::time::sleep(delay) => {
                    transcript.lock().await.push_bot(reply);
                    debug!("Reply {} delivered", id);
                }
            }
            pending.lock().await.remove(&id);
        });
        registry.insert(id, handle);
        debug!("Reply {} scheduled in {:?}", id, delay);
        id
    }

    pub async fn transcript(&self) -> Transcript {
        self.transcript.lock().await.clone()
    }

    pub async fn turns(&self) -> Vec<Turn> {
        self.transcript.lock().await.turns().to_vec()
    }

    /// Replies still waiting on their timer. Replies already handed to a
    /// running `settle` are not listed.
    pub async fn pending(&self) -> Vec<ReplyId> {
        self.pending.lock().await.keys().copied().collect()
    }

    /// Waits until every scheduled reply has landed or been cancelled.
    pub async fn settle(&self) {
        loop {
            let handles: Vec<JoinHandle<()>> = {
                let mut registry = self.pending.lock().await;
                registry.drain().map(|(_, handle)| handle).collect()
            };
            if handles.is_empty() {
                return;
            }
            join_all(handles).await;
        }
    }

    /// Cancels every pending reply and waits for the tasks to exit.
    ///
    /// Teardown is terminal: later sends are ignored.
    pub async fn teardown(&self) {
        self.shutdown.cancel();
        self.settle().await;
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
