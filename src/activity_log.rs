//! Append-only activity log shared by the registry and its collaborators.
//!
//! Every entry is stamped with the local ISO date, kept in memory for later
//! inspection, and mirrored to `tracing` at `info` level.

use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use tracing::info;

/// An ordered, never-truncated list of timestamped log entries.
///
/// Entries have the form `[<YYYY-MM-DD>] <message>`. Readers always receive a
/// copy, so history cannot be rewritten through [`ActivityLog::entries`].
///
/// # Example
///
/// ```
/// use hris::activity_log::ActivityLog;
///
/// let log = ActivityLog::new();
/// log.record("Database connected successfully");
/// assert_eq!(log.len(), 1);
/// assert!(log.entries()[0].ends_with("] Database connected successfully"));
/// ```
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Mutex<Vec<String>>,
}

impl ActivityLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message stamped with today's local date.
    pub fn record(&self, message: impl AsRef<str>) {
        self.record_on(Local::now().date_naive(), message);
    }

    /// Appends a message stamped with the given date.
    pub fn record_on(&self, date: NaiveDate, message: impl AsRef<str>) {
        let entry = format!("[{}] {}", date.format("%Y-%m-%d"), message.as_ref());
        info!(target: "hris::activity", "{}", entry);
        self.lock().push(entry);
    }

    /// Returns a snapshot of every entry in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Returns the last `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        let entries = self.lock();
        let start = entries.len().saturating_sub(count);
        entries[start..].to_vec()
    }

    /// Returns the number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written, so a
    // poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_formats_iso_date_prefix() {
        let log = ActivityLog::new();
        log.record_on(
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            "HRIS Manager initialized",
        );

        assert_eq!(log.entries(), vec!["[2025-03-07] HRIS Manager initialized"]);
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let log = ActivityLog::new();
        log.record("first");
        log.record("second");
        log.record("third");

        let entries = log.entries();
        assert!(entries[0].ends_with("first"));
        assert!(entries[1].ends_with("second"));
        assert!(entries[2].ends_with("third"));
    }

    #[test]
    fn test_entries_returns_a_copy() {
        let log = ActivityLog::new();
        log.record("kept");

        let mut snapshot = log.entries();
        snapshot.clear();

        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_tail_returns_last_entries() {
        let log = ActivityLog::new();
        for i in 0..7 {
            log.record(format!("entry {}", i));
        }

        let tail = log.tail(5);
        assert_eq!(tail.len(), 5);
        assert!(tail[0].ends_with("entry 2"));
        assert!(tail[4].ends_with("entry 6"));
    }

    #[test]
    fn test_tail_larger_than_log_returns_everything() {
        let log = ActivityLog::new();
        log.record("only");

        assert_eq!(log.tail(5).len(), 1);
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_activity_log_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ActivityLog>();
    }
}
