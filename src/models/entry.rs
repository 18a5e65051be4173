use super::auxiliary::Auxiliary;
use crate::utils::time;
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// One persisted work entry.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i64,
    pub employee: String,      // ⇔ entries.employee (TEXT NOT NULL)
    pub task: String,          // ⇔ entries.task (TEXT NOT NULL)
    pub auxiliary: Auxiliary,  // ⇔ entries.aux_kind + entries.aux_value
    pub time: String,          // ⇔ entries.time ("hh:mm AM/PM", legacy rows may hold "HH:MM")
    pub total: i64,            // ⇔ entries.total (INT, allotment denominator)
    pub completed: i64,        // ⇔ entries.completed (INT, 1..=total)
    pub pending: i64,          // ⇔ entries.pending (INT, derived, never authored)
    pub tally: i64,            // ⇔ entries.tally (INT, free-standing counter)
    pub date: NaiveDate,       // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub created_at: String,    // ⇔ entries.created_at (TEXT, RFC3339, store-assigned)
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time-of-day rendered in 12-hour form; legacy 24-hour values convert,
    /// values already carrying AM/PM pass through unchanged.
    pub fn display_time(&self) -> String {
        time::to_display_12_hour(&self.time)
    }

    /// Millisecond sort key derived from `created_at`.
    /// Rows with an unparseable timestamp sort together at the epoch.
    pub fn created_sort_key(&self) -> i64 {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    }
}

/// Candidate entry as received from the form/CLI, before validation.
/// Numeric fields the user may leave blank stay `Option` so that
/// "unset" and "zero" are never confused.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub employee: String,
    pub task: String,
    pub auxiliary: Auxiliary,
    pub time: String,
    pub total: i64,
    pub completed: Option<i64>,
    pub tally: Option<i64>,
    pub date: NaiveDate,
}

/// Validated entry, ready for the store's insert (which assigns
/// `id` and `created_at`).
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub employee: String,
    pub task: String,
    pub auxiliary: Auxiliary,
    pub time: String,
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub tally: i64,
    pub date: NaiveDate,
}
