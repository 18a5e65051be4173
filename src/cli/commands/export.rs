use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::export;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filters,
    } = cmd
    {
        let spec = filters.to_spec()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_entries(&mut pool)?;

        let report = Core::build_report(&entries, &spec);

        export::write(&report.rows, format, file, *force)?;
    }
    Ok(())
}
