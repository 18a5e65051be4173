use super::entry::Entry;
use crate::core::aggregate::{GrandTotals, TaskSummary};

/// Everything the presentation layer needs for one filtered view:
/// the rows (recency-sorted for display) plus both aggregate summaries.
#[derive(Debug, Default)]
pub struct Report {
    pub rows: Vec<Entry>,
    pub totals: GrandTotals,
    pub per_task: Vec<TaskSummary>,
}
