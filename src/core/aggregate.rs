//! Aggregation over a filtered snapshot: one grand-total record plus a
//! per-task summary table. Pure functions, recomputed on every call.

use crate::models::entry::Entry;
use serde::Serialize;

/// Sums over the whole filtered set.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct GrandTotals {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub tally: i64,
}

pub fn grand_totals(entries: &[Entry]) -> GrandTotals {
    entries.iter().fold(GrandTotals::default(), |mut acc, e| {
        acc.total += e.total;
        acc.completed += e.completed;
        acc.pending += e.pending;
        acc.tally += e.tally;
        acc
    })
}

/// One row of the per-task summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSummary {
    pub task: String,
    /// The LAST-SEEN row's total for the group, not a sum. Later rows are
    /// expected to carry the current allotment for the category, so each
    /// row overwrites the previous value. With disagreeing rows `pending`
    /// can go negative; callers render it as-is.
    pub total: i64,
    pub completed_sum: i64,
    pub tally_sum: i64,
    /// total − completed_sum, may be negative (see `total`).
    pub pending: i64,
}

/// Group the filtered set by task, in first-seen order.
pub fn per_task_summary(entries: &[Entry]) -> Vec<TaskSummary> {
    let mut out: Vec<TaskSummary> = Vec::new();

    for e in entries {
        match out.iter_mut().find(|s| s.task == e.task) {
            Some(s) => {
                s.completed_sum += e.completed;
                s.tally_sum += e.tally;
                s.total = e.total;
            }
            None => out.push(TaskSummary {
                task: e.task.clone(),
                total: e.total,
                completed_sum: e.completed,
                tally_sum: e.tally,
                pending: 0,
            }),
        }
    }

    for s in &mut out {
        s.pending = s.total - s.completed_sum;
    }

    out
}
