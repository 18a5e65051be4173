//! Ordering stages, kept separate from filtering.

use crate::models::entry::Entry;
use crate::utils::time;
use std::cmp::Reverse;

/// Rows shown by the bounded "most recent" view.
pub const RECENT_LIMIT: usize = 10;

/// Stable sort by creation timestamp, most recent first.
/// Ties keep their original relative order.
pub fn by_created_desc(entries: &mut [Entry]) {
    entries.sort_by_key(|e| Reverse(e.created_sort_key()));
}

/// The bounded view: recency-sorted and truncated to [`RECENT_LIMIT`] rows.
pub fn most_recent(entries: &[Entry], limit: usize) -> Vec<Entry> {
    let mut rows = entries.to_vec();
    by_created_desc(&mut rows);
    rows.truncate(limit);
    rows
}

/// Secondary mode: ascending by normalized time of day.
/// Rows whose time cannot be normalized sort last.
pub fn by_time_of_day(entries: &mut [Entry]) {
    entries.sort_by_key(|e| time::parse_to_minutes(&e.time).unwrap_or(u32::MAX));
}
