use crate::core::filter::FilterSpec;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::{date, time};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tasktally
/// CLI application to log employee task entries with SQLite
#[derive(Parser)]
#[command(
    name = "tasktally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple task logging CLI: record employee task entries and summarize completed/pending work using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter criteria shared by `filter`, `summary` and `export`.
/// Every field is optional; an empty criterion never excludes rows.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long = "from-date", help = "Inclusive lower date bound (YYYY-MM-DD)")]
    pub from_date: Option<String>,

    #[arg(long = "to-date", help = "Inclusive upper date bound (YYYY-MM-DD)")]
    pub to_date: Option<String>,

    #[arg(
        long = "from-time",
        help = "Inclusive lower time bound (HH:MM AM/PM or HH:MM)"
    )]
    pub from_time: Option<String>,

    #[arg(
        long = "to-time",
        help = "Inclusive upper time bound (HH:MM AM/PM or HH:MM)"
    )]
    pub to_time: Option<String>,

    #[arg(long, help = "Exact-match employee name")]
    pub employee: Option<String>,

    #[arg(long, help = "Exact-match task category")]
    pub task: Option<String>,

    #[arg(long, help = "Free-text search over employee and task")]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Parse the raw CLI strings into a normalized FilterSpec.
    pub fn to_spec(&self) -> AppResult<FilterSpec> {
        let from_date = date::parse_optional_date(self.from_date.as_ref())
            .map_err(AppError::InvalidDate)?;
        let to_date =
            date::parse_optional_date(self.to_date.as_ref()).map_err(AppError::InvalidDate)?;

        let from_minute = match &self.from_time {
            Some(t) => Some(time::parse_to_minutes(t)?),
            None => None,
        };
        let to_minute = match &self.to_time {
            Some(t) => Some(time::parse_to_minutes(t)?),
            None => None,
        };

        Ok(FilterSpec {
            from_date,
            to_date,
            from_minute,
            to_minute,
            employee: self.employee.clone(),
            task: self.task.clone(),
            search: self.search.clone(),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new work entry (validated before insertion)
    Add {
        /// Employee name
        employee: String,

        /// Task category
        task: String,

        /// Time of day (HH:MM AM/PM)
        #[arg(long)]
        time: String,

        /// Total allotment (defaults to the configured preset)
        #[arg(long)]
        total: Option<i64>,

        /// Completed count (must be 1..=total)
        #[arg(long)]
        completed: Option<i64>,

        /// Tally count (must be >= 0)
        #[arg(long)]
        tally: Option<i64>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text domain tag
        #[arg(long)]
        domain: Option<String>,

        /// Derived allotment count (alternative to --domain)
        #[arg(long, conflicts_with = "domain")]
        allotment: Option<i64>,
    },

    /// List entries, most recent first
    List {
        #[arg(long, help = "Show only entries for one date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Show only the most recent entries")]
        recent: bool,

        #[arg(long = "by-time", help = "Sort by time of day instead of recency")]
        by_time: bool,

        #[arg(long, help = "Free-text search over employee and task")]
        search: Option<String>,
    },

    /// Filter entries by date/time range, employee, task or free text
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Grand totals and per-task summary over a (filtered) collection
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Delete one entry by id
    Del {
        /// Entry id
        id: i64,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Import employee→task and employee→allotment mappings from CSV
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show the imported task list and allotment for one employee
    Lookup {
        /// Employee name
        employee: String,
    },

    /// Export (optionally filtered) entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Authenticate against the configured credentials
    Login {
        #[arg(long)]
        user: String,

        #[arg(long)]
        password: String,
    },
}
