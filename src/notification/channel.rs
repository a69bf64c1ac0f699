//! Notification channel trait and the e-mail and SMS implementations.

use std::fmt::Debug;

use tracing::debug;

/// A destination able to receive a free-text broadcast.
///
/// Delivery is synchronous and assumed to succeed.
pub trait NotificationChannel: Debug + Send + Sync {
    /// Returns the address this channel delivers to.
    fn target(&self) -> &str;

    /// Delivers `message` to the target.
    fn deliver(&self, message: &str);
}

/// Delivers messages to an e-mail address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChannel {
    address: String,
}

impl EmailChannel {
    /// Creates a channel for `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// Renders the console line for `message`.
    pub fn render(&self, message: &str) -> String {
        format!("EMAIL to {}: {}", self.address, message)
    }
}

impl NotificationChannel for EmailChannel {
    fn target(&self) -> &str {
        &self.address
    }

    fn deliver(&self, message: &str) {
        debug!(channel = "email", destination = %self.address, "Delivering notification");
        println!("{}", self.render(message));
    }
}

/// Delivers messages to a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsChannel {
    phone_number: String,
}

impl SmsChannel {
    /// Creates a channel for `phone_number`.
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    /// Renders the console line for `message`.
    pub fn render(&self, message: &str) -> String {
        format!("SMS to {}: {}", self.phone_number, message)
    }
}

impl NotificationChannel for SmsChannel {
    fn target(&self) -> &str {
        &self.phone_number
    }

    fn deliver(&self, message: &str) {
        debug!(channel = "sms", destination = %self.phone_number, "Delivering notification");
        println!("{}", self.render(message));
    }
}
