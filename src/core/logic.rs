use crate::core::{aggregate, filter, sort};
use crate::core::filter::FilterSpec;
use crate::models::{entry::Entry, report::Report};

pub struct Core;

impl Core {
    /// Derive one filtered view from a snapshot: matching rows
    /// (recency-sorted for display) plus both aggregate summaries.
    ///
    /// Aggregation runs over the filtered rows in snapshot order, before
    /// any display sorting, so the per-task last-seen total tracks
    /// insertion order.
    pub fn build_report(entries: &[Entry], spec: &FilterSpec) -> Report {
        let rows = filter::apply(entries, spec);

        let totals = aggregate::grand_totals(&rows);
        let per_task = aggregate::per_task_summary(&rows);

        let mut rows = rows;
        sort::by_created_desc(&mut rows);

        Report {
            rows,
            totals,
            per_task,
        }
    }
}
