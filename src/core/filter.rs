//! Filter pipeline: an ordered set of independent predicates combined by
//! logical AND over an in-memory snapshot of entries. A criterion that is
//! absent or empty never excludes a row. The whole snapshot is re-filtered
//! on every call; collections stay small enough that no indexing is needed.

use crate::models::entry::Entry;
use crate::utils::time;
use chrono::NaiveDate;

/// The active filter criteria. All fields optional; `Default` is the
/// identity filter.
#[derive(Debug, Default, Clone)]
pub struct FilterSpec {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    /// Inclusive minute-of-day bounds, already normalized.
    pub from_minute: Option<u32>,
    pub to_minute: Option<u32>,
    /// Exact-match criteria.
    pub employee: Option<String>,
    pub task: Option<String>,
    /// Case-insensitive substring over employee or task.
    pub search: Option<String>,
}

/// Apply the spec to a snapshot, returning the matching rows in their
/// original order. Ordering for display is a separate stage.
pub fn apply(entries: &[Entry], spec: &FilterSpec) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| matches(e, spec))
        .cloned()
        .collect()
}

fn matches(entry: &Entry, spec: &FilterSpec) -> bool {
    if let Some(from) = spec.from_date
        && entry.date < from
    {
        return false;
    }
    if let Some(to) = spec.to_date
        && entry.date > to
    {
        return false;
    }

    // Time bounds compare normalized minutes. When either bound is active,
    // rows without a normalizable time are excluded rather than crashing
    // on legacy values.
    if spec.from_minute.is_some() || spec.to_minute.is_some() {
        let Ok(minute) = time::parse_to_minutes(&entry.time) else {
            return false;
        };
        if let Some(from) = spec.from_minute
            && minute < from
        {
            return false;
        }
        if let Some(to) = spec.to_minute
            && minute > to
        {
            return false;
        }
    }

    if let Some(emp) = &spec.employee
        && !emp.is_empty()
        && entry.employee != *emp
    {
        return false;
    }

    if let Some(task) = &spec.task
        && !task.is_empty()
        && entry.task != *task
    {
        return false;
    }

    if let Some(needle) = &spec.search {
        let needle = needle.trim().to_lowercase();
        if !needle.is_empty()
            && !entry.employee.to_lowercase().contains(&needle)
            && !entry.task.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    true
}
