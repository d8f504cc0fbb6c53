use std::cell::RefCell;

const TRACING_TARGET: &str = "pipegraph::notify";

/// A fire-and-forget channel for user-facing feedback.
pub trait NotificationSink {
    fn message(&self, text: &str);
    fn error(&self, text: &str);
}

/// Forwards notifications to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn message(&self, text: &str) {
        tracing::info!(target: TRACING_TARGET, "{}", text);
    }

    fn error(&self, text: &str) {
        tracing::error!(target: TRACING_TARGET, "{}", text);
    }
}

/// A single recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Message(String),
    Error(String),
}

/// Keeps every notification it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.received
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(text) => Some(text.clone()),
                Notification::Message(_) => None,
            })
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn message(&self, text: &str) {
        self.received
            .borrow_mut()
            .push(Notification::Message(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.received
            .borrow_mut()
            .push(Notification::Error(text.to_string()));
    }
}
