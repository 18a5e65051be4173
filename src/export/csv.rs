use crate::models::entry::Entry;
use csv::Writer;

/// Write the entries as CSV to the given file.
pub fn write_csv(path: &str, entries: &[Entry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "employee",
        "task",
        "auxiliary",
        "time",
        "total",
        "completed",
        "pending",
        "tally",
        "date",
        "created_at",
    ])?;

    for e in entries {
        wtr.write_record(&[
            e.employee.clone(),
            e.task.clone(),
            e.auxiliary.display(),
            e.display_time(),
            e.total.to_string(),
            e.completed.to_string(),
            e.pending.to_string(),
            e.tally.to_string(),
            e.date_str(),
            e.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
