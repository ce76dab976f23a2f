use super::SuggestionSource;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionReply {
    pub seq: u64,
    pub query: String,
    pub suggestions: Vec<String>,
}

/// Outbound side of the role-entry debouncer.
pub trait SuggestionDispatch {
    fn dispatch(&mut self, seq: u64, query: String);
}

/// Runs each lookup on its own short-lived thread and funnels replies back
/// through a channel. Replies arrive in completion order, not dispatch order.
pub struct ThreadedSuggestionDispatcher {
    source: Arc<dyn SuggestionSource>,
    reply_tx: Sender<SuggestionReply>,
    reply_rx: Receiver<SuggestionReply>,
}

impl ThreadedSuggestionDispatcher {
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel::<SuggestionReply>();
        Self {
            source,
            reply_tx,
            reply_rx,
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<SuggestionReply> {
        match self.reply_rx.recv_timeout(timeout) {
            Ok(reply) => Some(reply),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl SuggestionDispatch for ThreadedSuggestionDispatcher {
    fn dispatch(&mut self, seq: u64, query: String) {
        let source = Arc::clone(&self.source);
        let tx = self.reply_tx.clone();
        let _ = thread::spawn(move || {
            let suggestions = source.suggest(&query);
            let _ = tx.send(SuggestionReply {
                seq,
                query,
                suggestions,
            });
        });
    }
}
