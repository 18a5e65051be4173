use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::auxiliary::Auxiliary;
use crate::models::entry::EntryDraft;
use crate::ui::messages::success;
use crate::utils::date;

/// Handle the `add` command: build the candidate entry from CLI input,
/// gate it through the validator, then hand it to the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        task,
        time,
        total,
        completed,
        tally,
        date: date_arg,
        domain,
        allotment,
    } = cmd
    {
        let entry_date = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let auxiliary = match (domain, allotment) {
            (_, Some(n)) => Auxiliary::Allotment(*n),
            (Some(d), None) => Auxiliary::Domain(d.clone()),
            (None, None) => Auxiliary::default(),
        };

        let draft = EntryDraft {
            employee: employee.clone(),
            task: task.clone(),
            auxiliary,
            time: time.clone(),
            total: total.unwrap_or(cfg.default_total),
            completed: *completed,
            tally: *tally,
            date: entry_date,
        };

        // Validation happens before any store call; a rejected draft
        // never reaches the database.
        let new_entry = validate::validate(draft)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let saved = insert_entry(&pool.conn, &new_entry)?;

        if let Err(e) = write_log(
            &pool.conn,
            "add",
            &saved.id.to_string(),
            &format!("Entry added for {} / {}", saved.employee, saved.task),
        ) {
            eprintln!("Failed to write internal log: {}", e);
        }

        success(format!(
            "Entry #{} added: {} | {} | {} | completed {}/{} (pending {})",
            saved.id,
            saved.employee,
            saved.task,
            saved.display_time(),
            saved.completed,
            saved.total,
            saved.pending,
        ));
    }
    Ok(())
}
