//! Log entry repository
//!
//! Every lookup takes the owner's ID: an entry belonging to someone else is
//! indistinguishable from a missing one.

use crate::store::MemoryStore;
use chrono::{DateTime, NaiveDate, Utc};
use fittrack_shared::{LogEntry, LogPayload, LogType};
use uuid::Uuid;

/// Listing filter
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFilter {
    pub log_type: Option<LogType>,
    /// UTC calendar day of `logged_at`
    pub date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    fn matches(&self, entry: &LogEntry) -> bool {
        self.log_type.map_or(true, |t| entry.log_type() == t)
            && self
                .date
                .map_or(true, |d| entry.logged_at.date_naive() == d)
    }
}

/// Entry fields to change; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct LogChanges {
    pub payload: Option<LogPayload>,
    pub notes: Option<String>,
    pub logged_at: Option<DateTime<Utc>>,
}

pub trait LogRepository: Send + Sync {
    fn insert_log(&self, entry: LogEntry) -> LogEntry;

    fn find_log(&self, owner: Uuid, id: Uuid) -> Option<LogEntry>;

    /// Owner's entries, newest `logged_at` first
    fn list_logs(&self, owner: Uuid, filter: LogFilter) -> Vec<LogEntry>;

    fn update_log(&self, owner: Uuid, id: Uuid, changes: LogChanges) -> Option<LogEntry>;

    fn delete_log(&self, owner: Uuid, id: Uuid) -> Option<LogEntry>;

    fn log_count(&self) -> usize;
}

impl LogRepository for MemoryStore {
    fn insert_log(&self, entry: LogEntry) -> LogEntry {
        self.logs.append(entry.clone());
        entry
    }

    fn find_log(&self, owner: Uuid, id: Uuid) -> Option<LogEntry> {
        self.logs
            .find(|entry| entry.id == id && entry.user_id == owner)
    }

    fn list_logs(&self, owner: Uuid, filter: LogFilter) -> Vec<LogEntry> {
        let mut entries = self
            .logs
            .filter(|entry| entry.user_id == owner && filter.matches(entry));
        // Stable sort keeps insertion order for equal timestamps
        entries.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        if let Some(limit) = filter.limit {
            entries.truncate(limit);
        }
        entries
    }

    fn update_log(&self, owner: Uuid, id: Uuid, changes: LogChanges) -> Option<LogEntry> {
        self.logs.update(
            |entry| entry.id == id && entry.user_id == owner,
            |entry| {
                if let Some(payload) = changes.payload {
                    entry.payload = payload;
                }
                if let Some(notes) = changes.notes {
                    entry.notes = Some(notes);
                }
                if let Some(logged_at) = changes.logged_at {
                    entry.logged_at = logged_at;
                }
                entry.updated_at = Utc::now();
            },
        )
    }

    fn delete_log(&self, owner: Uuid, id: Uuid) -> Option<LogEntry> {
        self.logs
            .remove(|entry| entry.id == id && entry.user_id == owner)
    }

    fn log_count(&self) -> usize {
        self.logs.len()
    }
}
