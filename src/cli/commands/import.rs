use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::write_log;
use crate::db::lookup;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let stats = lookup::import_csv(&mut pool, file)?;

        if let Err(e) = write_log(
            &pool.conn,
            "import",
            file,
            &format!(
                "Imported {} task mapping(s), {} allotment(s)",
                stats.tasks, stats.allotments
            ),
        ) {
            eprintln!("Failed to write internal log: {}", e);
        }

        success(format!(
            "Imported {} task mapping(s) and {} allotment(s) from {}.",
            stats.tasks, stats.allotments, file
        ));
    }
    Ok(())
}
