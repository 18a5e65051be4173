use crate::cli::commands::list::print_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter { filters } = cmd {
        let spec = filters.to_spec()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_entries(&mut pool)?;

        let report = Core::build_report(&entries, &spec);

        print_entries(&report.rows);

        if !report.rows.is_empty() {
            let t = &report.totals;
            println!(
                "\nTotals → total: {} | completed: {} | pending: {} | tally: {}",
                t.total, t.completed, t.pending, t.tally
            );
        }
    }
    Ok(())
}
