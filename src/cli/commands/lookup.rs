use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::lookup;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lookup { employee } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let tasks = lookup::tasks_for(&mut pool, employee)?;
        let allotment = lookup::allotment_for(&mut pool, employee)?;

        println!("Employee: {}", employee);

        match allotment {
            Some(n) => println!("Allotment: {}", n),
            None => println!("Allotment: --"),
        }

        if tasks.is_empty() {
            println!("No task mappings found.");
        } else {
            println!("Tasks:");
            for t in tasks {
                println!("  - {}", t);
            }
        }
    }
    Ok(())
}
