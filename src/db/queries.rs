//! Store operations over the `entries` table: create, list, delete.
//! Insertion assigns `id` and `created_at`; callers must pass entries that
//! already passed validation.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::auxiliary::Auxiliary;
use crate::models::entry::{Entry, NewEntry};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let aux_kind: String = row.get("aux_kind")?;
    let aux_value: String = row.get("aux_value")?;

    Ok(Entry {
        id: row.get("id")?,
        employee: row.get("employee")?,
        task: row.get("task")?,
        auxiliary: Auxiliary::from_db(&aux_kind, &aux_value),
        time: row.get("time")?,
        total: row.get("total")?,
        completed: row.get("completed")?,
        pending: row.get("pending")?,
        tally: row.get("tally")?,
        date,
        created_at: row.get("created_at")?,
    })
}

/// Full current collection, in insertion order. The engine treats the
/// result as an immutable snapshot.
pub fn load_entries(pool: &mut DbPool) -> AppResult<Vec<Entry>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM entries ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a validated entry, assigning `id` and `created_at`.
pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> AppResult<Entry> {
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO entries (employee, task, aux_kind, aux_value, time, total, completed, pending, tally, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            entry.employee,
            entry.task,
            entry.auxiliary.kind_str(),
            entry.auxiliary.value_str(),
            entry.time,
            entry.total,
            entry.completed,
            entry.pending,
            entry.tally,
            entry.date.format("%Y-%m-%d").to_string(),
            created_at,
        ],
    )?;

    Ok(Entry {
        id: conn.last_insert_rowid(),
        employee: entry.employee.clone(),
        task: entry.task.clone(),
        auxiliary: entry.auxiliary.clone(),
        time: entry.time.clone(),
        total: entry.total,
        completed: entry.completed,
        pending: entry.pending,
        tally: entry.tally,
        date: entry.date,
        created_at,
    })
}

/// Delete one entry by id.
pub fn delete_entry(pool: &mut DbPool, id: i64) -> AppResult<()> {
    let affected = pool
        .conn
        .execute("DELETE FROM entries WHERE id = ?1", [id])?;

    if affected == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
