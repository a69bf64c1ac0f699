//! Change notifications.
//!
//! The registry announces additions and removals through a
//! [`NotificationHub`], which fans each message out to every registered
//! [`NotificationChannel`] in registration order.

mod channel;
mod hub;

pub use channel::{EmailChannel, NotificationChannel, SmsChannel};
pub use hub::NotificationHub;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use crate::notification::NotificationChannel;

    /// A channel that records deliveries into a shared inbox.
    #[derive(Debug)]
    pub struct RecordingChannel {
        pub name: String,
        pub inbox: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingChannel {
        pub fn new(name: &str, inbox: Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                name: name.to_string(),
                inbox,
            }
        }
    }

    impl NotificationChannel for RecordingChannel {
        fn target(&self) -> &str {
            &self.name
        }

        fn deliver(&self, message: &str) {
            self.inbox
                .lock()
                .unwrap()
                .push(format!("{}: {}", self.name, message));
        }
    }
}
