//! Simulated persistence connection.
//!
//! There is no real storage behind this type: it only tracks whether the
//! connection is open and logs what a save would have done.

use std::sync::Arc;

use tracing::warn;

use crate::activity_log::ActivityLog;
use crate::models::Employee;

/// A connection flag standing in for a database.
#[derive(Debug)]
pub struct SimulatedStore {
    connected: bool,
    log: Arc<ActivityLog>,
}

impl SimulatedStore {
    /// Creates a closed connection.
    pub fn new(log: Arc<ActivityLog>) -> Self {
        Self {
            connected: false,
            log,
        }
    }

    /// Opens the connection. Logs only on the closed-to-open transition.
    pub fn connect(&mut self) {
        if !self.connected {
            self.connected = true;
            self.log.record("Database connected successfully");
        }
    }

    /// Closes the connection. Logs only on the open-to-closed transition.
    pub fn disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            self.log.record("Database disconnected");
        }
    }

    /// Returns true while the connection is open.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Pretends to persist `employee`. Returns whether the write was accepted.
    ///
    /// A closed connection is logged, never raised.
    pub fn save(&self, employee: &Employee) -> bool {
        if self.connected {
            self.log.record(format!("Employee saved to database: {}", employee.name()));
            true
        } else {
            warn!(employee_id = employee.id(), "Save skipped, store not connected");
            self.log.record("Cannot save employee - database not connected");
            false
        }
    }
}
