use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `db` maintenance subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations completed.");
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity check passed.");
            } else {
                warning(format!("Integrity check reported: {}", result));
                return Err(AppError::Migration(result));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            success("Database optimized.");
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
