//! Ordered fan-out of notifications to channels.

use std::sync::Arc;

use tracing::debug;

use crate::activity_log::ActivityLog;

use super::NotificationChannel;

/// Holds registered channels and broadcasts messages to them in order.
///
/// Channels are compared by identity: removing a channel removes the same
/// `Arc`, not an equal-looking one.
#[derive(Debug)]
pub struct NotificationHub {
    channels: Vec<Arc<dyn NotificationChannel>>,
    log: Arc<ActivityLog>,
}

impl NotificationHub {
    /// Creates a hub with no channels.
    pub fn new(log: Arc<ActivityLog>) -> Self {
        Self {
            channels: Vec::new(),
            log,
        }
    }

    /// Registers a channel at the end of the delivery order.
    pub fn add_channel(&mut self, channel: Arc<dyn NotificationChannel>) {
        debug!(destination = channel.target(), "Registering notification channel");
        self.channels.push(channel);
        self.log.record("Observer added to notification system");
    }

    /// Unregisters `channel`. Unknown channels are ignored.
    pub fn remove_channel(&mut self, channel: &Arc<dyn NotificationChannel>) {
        if let Some(index) = self
            .channels
            .iter()
            .position(|registered| Arc::ptr_eq(registered, channel))
        {
            self.channels.remove(index);
        }
        self.log.record("Observer removed from notification system");
    }

    /// Delivers `message` to every registered channel in registration order.
    pub fn broadcast(&self, message: &str) {
        self.log.record(format!("Broadcasting notification: {}", message));
        for channel in &self.channels {
            channel.deliver(message);
        }
    }

    /// Returns the number of registered channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if no channels are registered.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
