//! Schema creation and upgrades. All schema lives here; nothing else in
//! the crate issues CREATE TABLE statements.

use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `entries` table with the modern schema (tagged auxiliary
/// column pair instead of the legacy free-text `domain`).
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee    TEXT NOT NULL,
            task        TEXT NOT NULL,
            aux_kind    TEXT NOT NULL DEFAULT 'domain' CHECK(aux_kind IN ('domain','allotment')),
            aux_value   TEXT NOT NULL DEFAULT '',
            time        TEXT NOT NULL,
            total       INTEGER NOT NULL DEFAULT 0,
            completed   INTEGER NOT NULL,
            pending     INTEGER NOT NULL,
            tally       INTEGER NOT NULL DEFAULT 0,
            date        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Lookup tables fed by the external tabular feed:
/// employee → task list, employee → allotment count.
fn create_lookup_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employee_tasks (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            employee  TEXT NOT NULL,
            task      TEXT NOT NULL,
            UNIQUE(employee, task)
        );
        CREATE TABLE IF NOT EXISTS employee_allotments (
            employee   TEXT PRIMARY KEY,
            allotment  INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Copy rows from the legacy single-shape `tasks` table into `entries`.
///
/// The legacy schema overloaded one free-text `domain` column; migrated
/// rows keep it under the 'domain' tag. Pending is recomputed from
/// total/completed since legacy rows were allowed to drift.
fn migrate_legacy_tasks(conn: &Connection) -> Result<usize> {
    let copied = conn.execute(
        r#"
        INSERT INTO entries
            (employee, task, aux_kind, aux_value, time,
             total, completed, pending, tally, date, created_at)
        SELECT employee, task, 'domain', COALESCE(domain, ''), time,
               total, completed, MAX(0, total - completed),
               COALESCE("count", 0), date, created_at
        FROM tasks
        "#,
        [],
    )?;

    conn.execute("ALTER TABLE tasks RENAME TO tasks_legacy_migrated", [])?;
    Ok(copied)
}

/// Run every migration that is still pending. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entries_table(conn)?;
    create_lookup_tables(conn)?;

    if table_exists(conn, "tasks")? {
        warning("Legacy 'tasks' table detected, migrating rows…");
        let copied = migrate_legacy_tasks(conn)?;
        success(format!("Migrated {} legacy row(s) into 'entries'.", copied));
    }

    Ok(())
}
