//! Batch progress events and their observers.
//!
//! A batch run communicates with its caller only through these fire-and-forget
//! notifications, in emission order: per-item progress, per-item results, and
//! a final completion signal.

use std::sync::Arc;

use crossbeam_channel::Sender;

#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    /// Percentage of the batch completed so far, 0..=100.
    Progress { percent: u8 },

    /// One file has been measured.
    FileProcessed { name: String, minutes: f64 },

    /// The batch is complete; no further events follow.
    Finished,
}

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &BatchEvent);
}

/// Fans each event out to every registered handler, in registration order.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: BatchEvent) {
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for EventDispatcher {
    fn handle(&self, event: &BatchEvent) {
        for handler in &self.handlers {
            handler.handle(event);
        }
    }
}

/// Forwards events into a channel so a worker thread can publish to a
/// consumer on the submitting side. A disconnected receiver drops events
/// silently; the run itself is unaffected.
pub struct ChannelEmitter {
    sender: Sender<BatchEvent>,
}

impl ChannelEmitter {
    pub fn new(sender: Sender<BatchEvent>) -> Self {
        Self { sender }
    }
}

impl EventHandler for ChannelEmitter {
    fn handle(&self, event: &BatchEvent) {
        let _ = self.sender.send(event.clone());
    }
}
