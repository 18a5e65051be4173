use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !yes
            && !ask_confirmation(&format!(
                "Delete entry #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        delete_entry(&mut pool, *id)?;

        if let Err(e) = write_log(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Entry #{} deleted", id),
        ) {
            eprintln!("Failed to write internal log: {}", e);
        }

        success(format!("Entry #{} has been deleted.", id));
    }
    Ok(())
}
