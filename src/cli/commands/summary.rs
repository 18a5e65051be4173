use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_pending};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filters } = cmd {
        let spec = filters.to_spec()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_entries(&mut pool)?;

        let report = Core::build_report(&entries, &spec);

        if report.rows.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        let t = &report.totals;
        println!("=== Grand totals ({} entries) ===", report.rows.len());
        println!("Total:     {}", t.total);
        println!("Completed: {}", t.completed);
        println!(
            "Pending:   {}{}{}",
            color_for_pending(t.pending),
            t.pending,
            RESET
        );
        println!("Tally:     {}", t.tally);

        println!("\n=== Per-task summary ===");
        let mut table = Table::new(vec!["Task", "Total", "Completed", "Pending", "Tally"]);
        for s in &report.per_task {
            table.add_row(vec![
                s.task.clone(),
                s.total.to_string(),
                s.completed_sum.to_string(),
                s.pending.to_string(),
                s.tally_sum.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
