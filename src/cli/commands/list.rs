use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{self, FilterSpec};
use crate::core::sort;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        recent,
        by_time,
        search,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_entries(&mut pool)?;

        let day = match date_arg {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let spec = FilterSpec {
            from_date: day,
            to_date: day,
            search: search.clone(),
            ..FilterSpec::default()
        };

        let mut rows = filter::apply(&entries, &spec);

        if *by_time {
            sort::by_time_of_day(&mut rows);
        } else if *recent {
            rows = sort::most_recent(&rows, cfg.recent_limit);
        } else {
            sort::by_created_desc(&mut rows);
        }

        print_entries(&rows);
    }
    Ok(())
}

pub fn print_entries(rows: &[Entry]) {
    if rows.is_empty() {
        println!("No entries found.");
        return;
    }

    let mut table = Table::new(vec![
        "ID",
        "Employee",
        "Task",
        "Date",
        "Time",
        "Total",
        "Completed",
        "Pending",
        "Tally",
        "Domain/Allot",
    ]);

    for e in rows {
        table.add_row(vec![
            e.id.to_string(),
            e.employee.clone(),
            e.task.clone(),
            e.date_str(),
            e.display_time(),
            e.total.to_string(),
            e.completed.to_string(),
            e.pending.to_string(),
            e.tally.to_string(),
            e.auxiliary.display(),
        ]);
    }

    print!("{}", table.render());
}
